//! Terminal rendering module.
//!
//! The game is drawn as plain ASCII: one glyph for an empty cell, one for an
//! occupied cell (locked or falling), then the score, level and a help line.
//!
//! - [`game_view`] turns a `GameSnapshot` into a [`TextFrame`] (pure, testable)
//! - [`renderer`] puts the terminal in raw mode and prints frames with crossterm

pub mod game_view;
pub mod renderer;

pub use ascii_tetris_core as core;
pub use ascii_tetris_types as types;

pub use game_view::{GameView, TextFrame};
pub use renderer::{encode_frame_into, TerminalRenderer};
