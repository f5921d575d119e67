//! Checkers board representation and rules.
//!
//! A `Board` is a flat N×N grid of optional pieces. The rules live as methods
//! on it: capture and quiet-move scanning, mandatory-capture detection, step
//! application with promotion, and the piece-extinction win check. Turn
//! order, selection and capture chains are handled by
//! [`GameState`](crate::game::GameState).
//!
//! # Example
//! ```
//! use checkers_engine::board::{Board, Cell};
//!
//! let board = Board::new();
//! assert_eq!(board.find_quiet_moves(Cell(2, 1)), vec![Cell(3, 0), Cell(3, 2)]);
//! ```

mod builder;
mod error;
mod make_move;
mod movegen;
mod notation;
mod outcome;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardSizeError, MoveError, PlayError, PositionError, SelectionError};
pub use outcome::Outcome;
pub use state::{Board, DEFAULT_BOARD_SIZE, HOME_ROWS, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use types::{Cell, Color, LegalMoves, Move, MoveKind, Piece, PieceKind, DIAGONALS};
