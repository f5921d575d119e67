//! Fluent builder for constructing checkers positions.
//!
//! # Example
//! ```
//! use checkers_engine::board::{BoardBuilder, Cell, Color, Piece};
//!
//! let game = BoardBuilder::new(8)
//!     .piece(Cell(3, 2), Piece::man(Color::White))
//!     .piece(Cell(4, 3), Piece::man(Color::Black))
//!     .side_to_move(Color::White)
//!     .build_game()
//!     .unwrap();
//! assert!(game.must_capture());
//! ```

use super::error::BoardSizeError;
use super::{Board, Cell, Color, Piece, DEFAULT_BOARD_SIZE};
use crate::game::GameState;

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    size: usize,
    pieces: Vec<(Cell, Piece)>,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl BoardBuilder {
    /// Create an empty builder for a `size`×`size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        BoardBuilder {
            size,
            pieces: Vec::new(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder holding the standard 8×8 starting layout.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        BoardBuilder {
            size: board.size(),
            pieces: board.pieces().collect(),
            side_to_move: Color::White,
        }
    }

    /// Place a piece, replacing whatever was on the cell.
    #[must_use]
    pub fn piece(mut self, cell: Cell, piece: Piece) -> Self {
        self.pieces.retain(|(c, _)| *c != cell);
        self.pieces.push((cell, piece));
        self
    }

    /// Remove a piece from a cell.
    #[must_use]
    pub fn clear(mut self, cell: Cell) -> Self {
        self.pieces.retain(|(c, _)| *c != cell);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the board. Off-board pieces are dropped.
    pub fn build(&self) -> Result<Board, BoardSizeError> {
        let mut board = Board::empty(self.size)?;
        for &(cell, piece) in &self.pieces {
            board.set_piece(cell, Some(piece));
        }
        Ok(board)
    }

    /// Build a game with the configured side to move.
    pub fn build_game(&self) -> Result<GameState, BoardSizeError> {
        Ok(GameState::from_board(self.build()?, self.side_to_move))
    }
}
