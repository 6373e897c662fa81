//! Terminal Tetris runner (default binary).
//!
//! Each turn renders the board, waits up to one gravity interval for a key,
//! forwards at most one command to the game and then ticks it, until the game
//! is over.

mod cli;

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ascii_tetris::core::{GameSnapshot, GameState};
use ascii_tetris::input::handle_key_event;
use ascii_tetris::term::{GameView, TerminalRenderer, TextFrame};
use ascii_tetris::types::GameAction;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path)?;
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, "starting game");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    let game = result?;

    info!(score = game.score(), lines = game.lines(), "game finished");
    println!("Game over!");
    println!("Score: {}", game.score());
    Ok(())
}

/// Log to a file; the terminal itself is busy with the game.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(anyhow::Error::msg)
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<GameState> {
    let mut game = GameState::new(seed);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut frame = TextFrame::default();

    while !game.game_over() {
        game.snapshot_into(&mut snap);
        view.render_into(&snap, &mut frame);
        term.draw(&frame)?;

        let action = next_action(game.drop_interval())?;
        game.handle_input(action);
        game.tick();
    }

    Ok(game)
}

/// Wait up to `timeout` for one bound key press.
fn next_action(timeout: Duration) -> Result<GameAction> {
    let deadline = Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if !event::poll(remaining)? {
            return Ok(GameAction::None);
        }
        if let Event::Key(key) = event::read()? {
            if let Some(action) = handle_key_event(key) {
                return Ok(action);
            }
        }
        if remaining.is_zero() {
            return Ok(GameAction::None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_logging_init_is_reported() {
        let dir = std::env::temp_dir();
        let first = dir.join(format!("ascii-tetris-{}-a.log", std::process::id()));
        let second = dir.join(format!("ascii-tetris-{}-b.log", std::process::id()));

        assert!(init_logging(&first).is_ok());
        assert!(init_logging(&second).is_err());

        let _ = std::fs::remove_file(first);
        let _ = std::fs::remove_file(second);
    }
}
