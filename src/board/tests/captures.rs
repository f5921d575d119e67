//! Capture scanner tests.

use super::{black_man, board_with, white_king, white_man};
use crate::board::{Cell, Color, Piece};

fn sorted(mut cells: Vec<Cell>) -> Vec<Cell> {
    cells.sort();
    cells
}

#[test]
fn test_man_single_forward_capture() {
    let board = board_with(&[(Cell(3, 2), white_man()), (Cell(4, 3), black_man())]);
    assert_eq!(board.find_captures(Cell(3, 2)), vec![Cell(5, 4)]);
}

#[test]
fn test_man_captures_backward() {
    let board = board_with(&[(Cell(4, 3), white_man()), (Cell(3, 2), black_man())]);
    assert_eq!(board.find_captures(Cell(4, 3)), vec![Cell(2, 1)]);
}

#[test]
fn test_man_capture_blocked_landing() {
    let board = board_with(&[
        (Cell(3, 2), white_man()),
        (Cell(4, 3), black_man()),
        (Cell(5, 4), black_man()),
    ]);
    assert!(board.find_captures(Cell(3, 2)).is_empty());
}

#[test]
fn test_man_cannot_jump_own_piece() {
    let board = board_with(&[(Cell(3, 2), white_man()), (Cell(4, 3), white_man())]);
    assert!(board.find_captures(Cell(3, 2)).is_empty());
}

#[test]
fn test_man_capture_landing_off_board() {
    let board = board_with(&[(Cell(6, 1), white_man()), (Cell(7, 2), black_man())]);
    assert!(board.find_captures(Cell(6, 1)).is_empty());
}

#[test]
fn test_man_captures_in_several_directions() {
    let board = board_with(&[
        (Cell(3, 2), black_man()),
        (Cell(4, 3), white_man()),
        (Cell(4, 1), white_man()),
        (Cell(2, 3), white_man()),
    ]);
    assert_eq!(
        sorted(board.find_captures(Cell(3, 2))),
        vec![Cell(1, 4), Cell(5, 0), Cell(5, 4)]
    );
}

#[test]
fn test_king_flying_capture_lands_anywhere_behind() {
    let board = board_with(&[(Cell(2, 1), white_king()), (Cell(4, 3), black_man())]);
    assert_eq!(
        sorted(board.find_captures(Cell(2, 1))),
        vec![Cell(5, 4), Cell(6, 5), Cell(7, 6)]
    );
}

#[test]
fn test_king_landing_run_stops_at_next_piece() {
    let board = board_with(&[
        (Cell(2, 1), white_king()),
        (Cell(4, 3), black_man()),
        (Cell(6, 5), black_man()),
    ]);
    assert_eq!(board.find_captures(Cell(2, 1)), vec![Cell(5, 4)]);
}

#[test]
fn test_king_cannot_jump_two_adjacent_enemies() {
    let board = board_with(&[
        (Cell(2, 1), white_king()),
        (Cell(3, 2), black_man()),
        (Cell(4, 3), black_man()),
    ]);
    assert!(board.find_captures(Cell(2, 1)).is_empty());
}

#[test]
fn test_king_blocked_by_own_piece() {
    let board = board_with(&[
        (Cell(2, 1), white_king()),
        (Cell(3, 2), white_man()),
        (Cell(4, 3), black_man()),
    ]);
    assert!(board.find_captures(Cell(2, 1)).is_empty());
}

#[test]
fn test_black_king_captures_backward_and_forward() {
    let board = board_with(&[
        (Cell(4, 3), Piece::king(Color::Black)),
        (Cell(6, 5), white_man()),
        (Cell(2, 1), white_man()),
    ]);
    assert_eq!(
        sorted(board.find_captures(Cell(4, 3))),
        vec![Cell(1, 0), Cell(7, 6)]
    );
}

#[test]
fn test_captures_from_empty_or_off_board_cell() {
    let board = board_with(&[(Cell(3, 2), white_man()), (Cell(4, 3), black_man())]);
    assert!(board.find_captures(Cell(0, 1)).is_empty());
    assert!(board.find_captures(Cell(-1, 2)).is_empty());
    assert!(board.find_captures(Cell(8, 8)).is_empty());
}

#[test]
fn test_captured_cell_for_man_and_king() {
    let board = board_with(&[(Cell(2, 1), white_king()), (Cell(4, 3), black_man())]);
    assert_eq!(board.captured_cell(Cell(2, 1), Cell(6, 5)), Some(Cell(4, 3)));
    assert_eq!(board.captured_cell(Cell(2, 1), Cell(3, 2)), None);
}
