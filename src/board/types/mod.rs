//! Core checkers types.
//!
//! - `Cell` - (row, col) coordinate, possibly off-board
//! - `Piece`, `PieceKind` and `Color`
//! - `Move`, `MoveKind` and `LegalMoves`

mod cell;
mod moves;
mod piece;

pub use cell::{Cell, DIAGONALS};
pub use moves::{LegalMoves, Move, MoveKind};
pub use piece::{Color, Piece, PieceKind};
