//! ASCII Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so the binary, the
//! integration tests and the benchmarks share one import path:
//! `ascii_tetris::{core, input, term, types}`.

pub use ascii_tetris_core as core;
pub use ascii_tetris_input as input;
pub use ascii_tetris_term as term;
pub use ascii_tetris_types as types;
