//! Board module - manages the game grid
//!
//! The board is a grid where each cell is empty or holds the kind of a locked piece.
//! Uses a flat row-major vector for cache locality.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges 0..height
//! (top to bottom). Cells with negative y sit above the visible board.

use crate::geometry::Piece;
use crate::types::{Cell, Point, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board - `width` columns x `height` rows using flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// Panics if either dimension is zero or does not fit an `i32` coordinate.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be non-zero");
        assert!(
            i32::try_from(width).is_ok() && i32::try_from(height).is_ok(),
            "board dimensions exceed coordinate range"
        );
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || x as usize >= self.width || y < 0 || y as usize >= self.height
    }

    /// Check whether `piece` placed at `position` leaves the board or overlaps it.
    ///
    /// Cells above the top edge (y < 0) only get the horizontal bounds check,
    /// so pieces may spawn partly hidden.
    pub fn collides(&self, piece: &Piece, position: Point) -> bool {
        piece.cells(position).any(|c| {
            c.x < 0
                || c.x as usize >= self.width
                || (c.y >= 0 && (c.y as usize >= self.height || self.is_occupied(c.x, c.y)))
        })
    }

    /// Mark every on-board cell of `piece` at `position` as occupied.
    ///
    /// Cells above the board are skipped.
    pub fn lock(&mut self, piece: &Piece, position: Point) {
        let kind = piece.kind();
        for c in piece.cells(position) {
            if c.y >= 0 {
                self.set(c.x, c.y, Some(kind));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Cells of row `y`, or None if out of bounds
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Clear a row and shift all rows above down by one
    fn remove_row(&mut self, y: usize) {
        let width = self.width;

        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        for cell in &mut self.cells[..width] {
            *cell = None;
        }
    }

    /// Remove every full row, scanning top to bottom, and return how many were removed.
    ///
    /// Each removal shifts the rows above it down by one and inserts an empty row
    /// at the top, so the remaining rows keep their relative order.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        for y in 0..self.height {
            if self.is_row_full(y) {
                self.remove_row(y);
                cleared += 1;
            }
        }
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Fill row `y` completely with `cell`, skipping the columns in `gaps`
    pub fn fill_row(&mut self, y: usize, cell: Cell, gaps: &[usize]) {
        if y >= self.height {
            return;
        }
        for x in 0..self.width {
            if !gaps.contains(&x) {
                self.cells[y * self.width + x] = cell;
            }
        }
    }

    /// Create from a 2D vector (rows top to bottom)
    ///
    /// Panics if the rows are empty or ragged.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        assert!(rows.iter().all(|row| row.len() == width), "ragged board rows");

        let mut board = Self::new(width, height);
        for (y, row) in rows.into_iter().enumerate() {
            board.cells[y * width..(y + 1) * width].copy_from_slice(&row);
        }
        board
    }

    /// Convert to 2D vector for testing/display
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::default();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::default();

        board.set(0, 0, Some(PieceKind::I));
        board.set(5, 10, Some(PieceKind::T));

        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_remove_row_shifts_rows_above() {
        let mut board = Board::new(3, 4);
        board.set(0, 0, Some(PieceKind::O));
        board.set(1, 1, Some(PieceKind::S));
        board.fill_row(2, Some(PieceKind::I), &[]);
        board.set(2, 3, Some(PieceKind::Z));

        board.remove_row(2);

        assert_eq!(board.row(0), Some(&[None, None, None][..]));
        assert_eq!(board.get(0, 1), Some(Some(PieceKind::O)));
        assert_eq!(board.get(1, 2), Some(Some(PieceKind::S)));
        assert_eq!(board.get(2, 3), Some(Some(PieceKind::Z)));
    }

    #[test]
    fn test_remove_top_row() {
        let mut board = Board::new(2, 2);
        board.fill_row(0, Some(PieceKind::I), &[]);
        board.set(0, 1, Some(PieceKind::J));

        board.remove_row(0);

        assert!(board.row(0).unwrap().iter().all(Option::is_none));
        assert_eq!(board.get(0, 1), Some(Some(PieceKind::J)));
    }

    #[test]
    fn test_board_from_rows_roundtrip() {
        let mut rows = vec![vec![None; 10]; 20];
        rows[5][3] = Some(PieceKind::O);
        rows[10][7] = Some(PieceKind::L);

        let board = Board::from_rows(rows.clone());
        assert_eq!(board.to_rows(), rows);
    }

    #[test]
    #[should_panic]
    fn test_zero_width_panics() {
        let _ = Board::new(0, 20);
    }
}
