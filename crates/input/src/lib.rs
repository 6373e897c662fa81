//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The game core
//! never sees key codes, only decoded commands, so any other command source
//! (scripts, tests) can drive it the same way.

pub mod map;

pub use ascii_tetris_types as types;

pub use map::{handle_key_event, map_key, should_quit};
