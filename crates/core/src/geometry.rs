//! Geometry module - pieces as point sets and their rotation
//!
//! A piece is an ordered list of points relative to an implicit pivot. The
//! absolute cells of a falling piece are each point plus the piece position.
//!
//! Rotation turns the whole point list 90° clockwise (y grows downward) about
//! the piece's own centroid. The centroid uses truncating integer division, so
//! shapes whose coordinate sums are not multiples of the point count shift by a
//! cell or so over repeated rotations. That drift is part of the game's feel
//! and is kept as is.

use arrayvec::ArrayVec;

use crate::pieces::template;
use crate::types::{PieceKind, Point, PIECE_POINTS};

/// Point list of a single piece (stack-only, no allocation)
pub type PiecePoints = ArrayVec<Point, PIECE_POINTS>;

/// A tetromino: its catalog kind and its current local points
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    points: PiecePoints,
}

impl Piece {
    /// Create a piece from its catalog template.
    ///
    /// The template points are copied, so later rotations never touch the catalog.
    pub fn new(kind: PieceKind) -> Self {
        Self::from_points(kind, template(kind))
    }

    /// Create a piece from explicit local points.
    ///
    /// Panics if more than [`PIECE_POINTS`] points are given.
    pub fn from_points(kind: PieceKind, points: &[Point]) -> Self {
        let points = points.iter().copied().collect();
        Self { kind, points }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Absolute cells of the piece when placed at `position`
    pub fn cells(&self, position: Point) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().map(move |&p| p + position)
    }

    /// Truncated integer centroid of the local points
    pub fn centroid(&self) -> Point {
        let n = self.points.len() as i32;
        if n == 0 {
            return Point::default();
        }
        let (sx, sy) = self
            .points
            .iter()
            .fold((0, 0), |(sx, sy), p| (sx + p.x, sy + p.y));
        // `/` on i32 truncates toward zero.
        Point::new(sx / n, sy / n)
    }

    /// Return this piece rotated 90° clockwise about its centroid.
    ///
    /// No bounds or overlap check happens here.
    pub fn rotated(&self) -> Self {
        let c = self.centroid();
        let points = self
            .points
            .iter()
            .map(|p| Point::new(c.y - p.y + c.x, p.x - c.x + c.y))
            .collect();
        Self {
            kind: self.kind,
            points,
        }
    }

    /// Return this piece with every local point shifted by (dx, dy)
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        let offset = Point::new(dx, dy);
        Self {
            kind: self.kind,
            points: self.points.iter().map(|&p| p + offset).collect(),
        }
    }
}

/// Rotate `piece` 90° clockwise about its truncated centroid
pub fn rotate(piece: &Piece) -> Piece {
    piece.rotated()
}
