//! Pieces module - the fixed catalog of tetromino shapes
//!
//! Each template is four points in local coordinates. Templates are `const`
//! data; an active piece always owns a copy of its points.

use crate::geometry::Piece;
use crate::rng::SimpleRng;
use crate::types::{PieceKind, Point, PIECE_POINTS};

/// Local points of a catalog shape
pub type PieceTemplate = [Point; PIECE_POINTS];

const fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// Catalog templates, indexed in [`PieceKind::ALL`] order
pub const CATALOG: [PieceTemplate; 7] = [
    // I
    [p(0, 0), p(0, 1), p(0, 2), p(0, 3)],
    // O
    [p(0, 0), p(0, 1), p(1, 0), p(1, 1)],
    // L
    [p(0, 0), p(0, 1), p(0, 2), p(1, 2)],
    // J
    [p(0, 0), p(0, 1), p(0, 2), p(-1, 2)],
    // S
    [p(0, 0), p(0, 1), p(1, 1), p(1, 2)],
    // Z
    [p(0, 0), p(0, 1), p(-1, 1), p(-1, 2)],
    // T
    [p(0, 0), p(0, 1), p(0, 2), p(-1, 1)],
];

/// Get the template points for a piece kind
pub fn template(kind: PieceKind) -> &'static PieceTemplate {
    &CATALOG[kind.index()]
}

/// Pick one of the seven kinds uniformly at random.
///
/// Every draw is independent, so immediate repeats are possible.
pub fn random_kind(rng: &mut SimpleRng) -> PieceKind {
    PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
}

/// Draw a fresh piece (a copy of a random template)
pub fn random_piece(rng: &mut SimpleRng) -> Piece {
    Piece::new(random_kind(rng))
}
