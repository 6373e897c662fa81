//! GameView: maps a `GameSnapshot` into plain ASCII text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::{self, Write as _};

use crate::core::GameSnapshot;
use crate::types::CONTROLS_HELP;

/// One rendered screen: the board rows followed by the status lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFrame {
    lines: Vec<String>,
}

impl TextFrame {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, y: usize) -> Option<&str> {
        self.lines.get(y).map(String::as_str)
    }

    /// Character at column `x` of line `y`
    pub fn char_at(&self, x: usize, y: usize) -> Option<char> {
        self.line(y).and_then(|l| l.chars().nth(x))
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Resize to `height` empty lines, keeping the allocations of existing ones
    fn reset(&mut self, height: usize) {
        self.lines.resize_with(height, String::new);
        for line in &mut self.lines {
            line.clear();
        }
    }
}

impl fmt::Display for TextFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// ASCII renderer for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    empty: char,
    filled: char,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            empty: '.',
            filled: '#',
        }
    }
}

impl GameView {
    pub fn new(empty: char, filled: char) -> Self {
        Self { empty, filled }
    }

    /// Render the snapshot into an existing frame, reusing its line buffers.
    ///
    /// Falling piece cells above the board are not drawn.
    pub fn render_into(&self, snap: &GameSnapshot, frame: &mut TextFrame) {
        let width = snap.board.width() as i32;
        let height = snap.board.height();
        frame.reset(height + 3);

        for (y, line) in frame.lines[..height].iter_mut().enumerate() {
            line.extend((0..width).map(|x| match snap.visible_cell(x, y as i32) {
                Some(_) => self.filled,
                None => self.empty,
            }));
        }

        // Writing into a String cannot fail.
        let _ = write!(frame.lines[height], "Score: {}", snap.score);
        let _ = write!(frame.lines[height + 1], "Level: {}", snap.level);
        frame.lines[height + 2].push_str(CONTROLS_HELP);
    }

    pub fn render(&self, snap: &GameSnapshot) -> TextFrame {
        let mut frame = TextFrame::default();
        self.render_into(snap, &mut frame);
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn test_frame_has_board_plus_status_lines() {
        let snap = GameState::new(1).snapshot();
        let frame = GameView::default().render(&snap);

        assert_eq!(frame.height(), 20 + 3);
        assert!(frame.lines()[..20].iter().all(|l| l.len() == 10));
        assert_eq!(frame.line(20), Some("Score: 0"));
        assert_eq!(frame.line(21), Some("Level: 0"));
        assert_eq!(frame.line(22), Some(CONTROLS_HELP));
    }

    #[test]
    fn test_custom_glyphs() {
        let mut snap = GameState::new(1).snapshot();
        snap.active_kind = None;
        let frame = GameView::new(' ', '@').render(&snap);
        assert_eq!(frame.line(0), Some("          "));
    }

    #[test]
    fn test_render_into_reuses_line_buffers() {
        let view = GameView::default();
        let mut frame = TextFrame::default();

        let mut busy = GameState::new(1);
        busy.board_mut().fill_row(19, Some(crate::types::PieceKind::O), &[]);
        view.render_into(&busy.snapshot(), &mut frame);
        let first_row = frame.lines()[0].as_ptr();

        // A smaller board into the same frame leaves no stale lines behind.
        let small = GameState::with_size(4, 6, 2).snapshot();
        view.render_into(&small, &mut frame);

        assert_eq!(frame, view.render(&small));
        assert_eq!(frame.height(), 4 + 3);
        assert_eq!(frame.lines()[0].as_ptr(), first_row);
    }

    #[test]
    fn test_display_joins_lines() {
        let snap = GameState::new(1).snapshot();
        let frame = GameView::default().render(&snap);
        let text = frame.to_string();
        assert_eq!(text.lines().count(), frame.height());
        assert!(text.ends_with(&format!("{CONTROLS_HELP}\n")));
    }
}
