//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use checkers_engine::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, Cell, Color, LegalMoves, Move, MoveError, MoveKind, Outcome, Piece,
    PieceKind, PositionError, SelectionError,
};
pub use crate::game::{CommitResult, GameState};
