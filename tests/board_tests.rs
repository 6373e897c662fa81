//! Board tests - collision, locking and row clearing

use ascii_tetris::core::{Board, Piece};
use ascii_tetris::types::{PieceKind, Point, BOARD_HEIGHT, BOARD_WIDTH};

fn filled_board(rows: std::ops::Range<usize>) -> Board {
    let mut board = Board::default();
    for y in rows {
        board.fill_row(y, Some(PieceKind::I), &[]);
    }
    board
}

#[test]
fn test_board_new_empty() {
    let board = Board::default();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            assert_eq!(board.get(x, y), Some(None), "Cell ({}, {}) should be empty", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::default();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i32, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i32), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::default();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert!(!board.is_occupied(5, 10));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i32, Some(PieceKind::T)));
}

// ============== Collision ==============

#[test]
fn test_collides_on_walls_and_floor() {
    let board = Board::default();
    let o = Piece::new(PieceKind::O);

    assert!(!board.collides(&o, Point::new(0, 0)));
    assert!(!board.collides(&o, Point::new(8, 18)));

    assert!(board.collides(&o, Point::new(-1, 0)));
    assert!(board.collides(&o, Point::new(9, 0)));
    assert!(board.collides(&o, Point::new(0, 19)));
}

#[test]
fn test_collides_above_board_is_exempt_from_occupancy_only() {
    let mut board = Board::default();
    board.fill_row(0, Some(PieceKind::Z), &[4]);
    let i = Piece::new(PieceKind::I);

    // Cells y = -3..=0 in column 4: only (4, 0) is on the board and it is empty.
    assert!(!board.collides(&i, Point::new(4, -3)));
    // Column 3 at y = 0 is occupied.
    assert!(board.collides(&i, Point::new(3, -3)));
    // Entirely above the board, but outside the side walls.
    assert!(board.collides(&i, Point::new(-1, -10)));
    assert!(board.collides(&i, Point::new(BOARD_WIDTH as i32, -10)));
    assert!(!board.collides(&i, Point::new(0, -10)));
}

#[test]
fn test_collides_with_locked_cells() {
    let mut board = Board::default();
    board.set(5, 19, Some(PieceKind::S));
    let i = Piece::new(PieceKind::I);

    assert!(board.collides(&i, Point::new(5, 16)));
    assert!(!board.collides(&i, Point::new(5, 15)));
    assert!(!board.collides(&i, Point::new(4, 16)));
}

// ============== Locking ==============

#[test]
fn test_lock_marks_piece_cells() {
    let mut board = Board::default();
    board.set(0, 19, Some(PieceKind::J));
    let t = Piece::new(PieceKind::T);

    board.lock(&t, Point::new(3, 10));

    assert!(board.is_occupied(0, 19));
    for (x, y) in [(3, 10), (3, 11), (3, 12), (2, 11)] {
        assert_eq!(board.get(x, y), Some(Some(PieceKind::T)));
    }
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 5);
}

#[test]
fn test_lock_skips_cells_above_board() {
    let mut board = Board::default();
    let i = Piece::new(PieceKind::I);

    board.lock(&i, Point::new(2, -2));

    assert!(board.is_occupied(2, 0));
    assert!(board.is_occupied(2, 1));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
}

// ============== Row clearing ==============

#[test]
fn test_is_row_full() {
    let mut board = Board::default();
    assert!(!board.is_row_full(19));

    board.fill_row(19, Some(PieceKind::O), &[3]);
    assert!(!board.is_row_full(19));

    board.set(3, 19, Some(PieceKind::O));
    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(BOARD_HEIGHT));
}

#[test]
fn test_clear_without_full_rows_is_noop() {
    let mut board = Board::default();
    board.fill_row(19, Some(PieceKind::L), &[0]);
    board.fill_row(10, Some(PieceKind::L), &[9]);
    board.set(4, 3, Some(PieceKind::T));
    let before = board.clone();

    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_single_row_shifts_rows_above() {
    let mut board = Board::default();
    board.set(1, 0, Some(PieceKind::S));
    board.set(2, 5, Some(PieceKind::T));
    board.fill_row(12, Some(PieceKind::I), &[]);
    board.set(7, 15, Some(PieceKind::Z));

    let before = board.to_rows();
    assert_eq!(board.clear_full_rows(), 1);

    let mut expected = before.clone();
    expected.remove(12);
    expected.insert(0, vec![None; BOARD_WIDTH]);
    assert_eq!(board.to_rows(), expected);

    assert!(board.is_occupied(1, 1));
    assert!(board.is_occupied(2, 6));
    assert!(board.is_occupied(7, 15));
}

#[test]
fn test_clear_multiple_separated_rows() {
    let mut board = Board::default();
    board.fill_row(19, Some(PieceKind::I), &[]);
    board.fill_row(18, Some(PieceKind::I), &[4]);
    board.fill_row(17, Some(PieceKind::I), &[]);
    board.set(0, 16, Some(PieceKind::J));

    assert_eq!(board.clear_full_rows(), 2);

    // The partial row and the marker above it drop by two.
    assert!(board.is_occupied(0, 19));
    assert!(!board.is_occupied(4, 19));
    assert!(board.is_occupied(0, 18));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 10);
}

#[test]
fn test_clear_four_bottom_rows() {
    let mut board = filled_board(16..20);
    assert_eq!(board.clear_full_rows(), 4);
    assert!(board.cells().iter().all(Option::is_none));
}

#[test]
fn test_lock_then_clear_nineteen_rows() {
    let mut board = Board::default();
    for y in 1..BOARD_HEIGHT {
        let gaps: &[usize] = if y >= 16 { &[7] } else { &[] };
        board.fill_row(y, Some(PieceKind::O), gaps);
    }

    board.lock(&Piece::new(PieceKind::I), Point::new(7, 16));
    assert_eq!(board.clear_full_rows(), 19);
    assert!(board.cells().iter().all(Option::is_none));
}

#[test]
fn test_custom_size_board() {
    let mut board = Board::new(4, 6);
    assert_eq!(board.width(), 4);
    assert_eq!(board.height(), 6);
    assert_eq!(board.rows().count(), 6);

    let o = Piece::new(PieceKind::O);
    assert!(board.collides(&o, Point::new(3, 0)));
    assert!(board.collides(&o, Point::new(0, 5)));

    board.fill_row(5, Some(PieceKind::O), &[]);
    assert_eq!(board.clear_full_rows(), 1);
    assert!(board.cells().iter().all(Option::is_none));
}
