//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a plain function or method on owned state
//! - **Portable**: Any shell (terminal, script, test harness) can drive it
//!
//! # Module Structure
//!
//! - [`geometry`]: pieces as point lists and centroid rotation
//! - [`pieces`]: the seven tetromino templates and random selection
//! - [`board`]: grid with collision detection, locking and row clearing
//! - [`scoring`]: line clear points, level and gravity interval rules
//! - [`game_state`]: the state machine driven by input commands and ticks
//! - [`rng`]: seedable LCG
//!
//! # Game Rules
//!
//! - Pieces spawn at `(width / 2, 0)` and fall one row per tick
//! - Moves are undone when they collide; rotation is applied unchecked
//! - A piece that cannot fall locks; a new piece that does not fit ends the game
//! - Clearing `n` rows at once scores `100 * 2^n`; every 10 lines is a level
//!
//! # Example
//!
//! ```
//! use ascii_tetris_core::GameState;
//! use ascii_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.handle_input(GameAction::MoveDown);
//! game.tick();
//!
//! assert_eq!(game.position().y, 2);
//! assert!(!game.game_over());
//! ```
//!
//! # Timing
//!
//! [`GameState::tick`] never sleeps. Shells wait
//! [`GameState::drop_interval`] between ticks: 1000ms at level 0, 100ms less
//! per level, never below 100ms.

pub mod board;
pub mod game_state;
pub mod geometry;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use ascii_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, TickEvent};
pub use geometry::{rotate, Piece, PiecePoints};
pub use pieces::{random_piece, template, CATALOG};
pub use rng::SimpleRng;
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_score};
pub use snapshot::GameSnapshot;
