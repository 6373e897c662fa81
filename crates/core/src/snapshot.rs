use crate::board::Board;
use crate::geometry::PiecePoints;
use crate::types::{Cell, PieceKind};

/// Read-only view of a game for renderers.
///
/// `active_cells` are absolute board coordinates and may include cells above
/// the board (negative y).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub active_kind: Option<PieceKind>,
    pub active_cells: PiecePoints,
    pub score: u64,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Cell as it should be drawn: locked cells plus the falling piece
    pub fn visible_cell(&self, x: i32, y: i32) -> Cell {
        if let Some(kind) = self.active_kind {
            if self.active_cells.iter().any(|c| c.x == x && c.y == y) {
                return Some(kind);
            }
        }
        self.board.get(x, y).flatten()
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: Board::default(),
            active_kind: None,
            active_cells: PiecePoints::new(),
            score: 0,
            level: 0,
            lines: 0,
            game_over: false,
        }
    }
}
