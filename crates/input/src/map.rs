//! Key mapping from terminal events to game actions.
//!
//! Bindings: `w`/`j`/Up rotate, `a`/`h`/Left move left, `s`/`k`/Down move
//! down, `d`/`l`/Right move right, `q` or Ctrl-C quits.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to a game action, `None` for unbound keys.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(GameAction::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(GameAction::Rotate)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(GameAction::MoveLeft)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(GameAction::MoveDown)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(GameAction::MoveRight)
        }
        _ => None,
    }
}

/// Map keyboard input to a game action, [`GameAction::None`] for unbound keys.
pub fn map_key(key: KeyEvent) -> GameAction {
    handle_key_event(key).unwrap_or(GameAction::None)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
