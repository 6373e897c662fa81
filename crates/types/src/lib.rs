//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The shipped playfield profile:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn position**: (width / 2, 0) = (5, 0)
//!
//! # Timing and Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 0 |
//! | `DROP_STEP_MS` | 100 | Interval reduction per level |
//! | `MIN_DROP_MS` | 100 | Interval floor (reached at level 9) |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines needed per level |
//! | `LINE_CLEAR_BASE_SCORE` | 100 | Doubled once per row cleared at once |
//!
//! # Examples
//!
//! ```
//! use ascii_tetris_types::{PieceKind, Point, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.as_str(), "t");
//!
//! let p = Point::new(1, 2) + Point::new(5, 0);
//! assert_eq!(p, Point::new(6, 2));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::ops::{Add, Sub};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Gravity interval at level 0 in milliseconds
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval reduction per level in milliseconds
pub const DROP_STEP_MS: u32 = 100;

/// Gravity interval floor in milliseconds
pub const MIN_DROP_MS: u32 = 100;

/// Cleared lines per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Base score for a line clear, doubled for each row cleared in one tick
pub const LINE_CLEAR_BASE_SCORE: u64 = 100;

/// Number of points in every catalog piece
pub const PIECE_POINTS: usize = 4;

/// Static control help shown below the board
pub const CONTROLS_HELP: &str = "asd to move, w to rotate, q to quit";


/// Integer grid coordinate (x grows right, y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// The seven tetromino piece kinds, in catalog order
///
/// - **I**: straight bar
/// - **O**: 2x2 square
/// - **L**: L-shaped
/// - **J**: J-shaped (mirror of L)
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **T**: T-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    L,
    J,
    S,
    Z,
    T,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
    ];

    /// Position of this kind in [`PieceKind::ALL`]
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::L => 2,
            PieceKind::J => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::T => 6,
        }
    }

    /// Lowercase letter, used as a log field
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::T => "t",
        }
    }
}

/// A board cell: `None` when empty, the kind of the locked piece when occupied
pub type Cell = Option<PieceKind>;

/// Player commands consumed by the game state machine
///
/// Commands are already decoded; where they come from (keyboard, script,
/// test harness) is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Rotate piece 90° clockwise (applied without a collision check)
    Rotate,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell down
    MoveDown,
    /// Move piece one cell right
    MoveRight,
    /// End the game
    Quit,
    /// No command this turn
    None,
}
