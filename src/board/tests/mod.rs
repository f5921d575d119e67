//! Board module tests.
//!
//! - `captures.rs` - Man hops and flying king captures
//! - `quiet_moves.rs` - Non-capturing steps and slides
//! - `mandatory.rs` - Board-wide capture detection and move generation
//! - `outcome.rs` - Piece-extinction win check
//! - `proptest.rs` - Property-based tests over random playouts

mod captures;

use crate::board::{Board, BoardBuilder, Cell, Color, Piece};

pub(super) fn board_with(pieces: &[(Cell, Piece)]) -> Board {
    pieces
        .iter()
        .fold(BoardBuilder::new(8), |b, &(cell, piece)| b.piece(cell, piece))
        .build()
        .expect("8x8 board")
}

pub(super) fn white_man() -> Piece {
    Piece::man(Color::White)
}

pub(super) fn black_man() -> Piece {
    Piece::man(Color::Black)
}

pub(super) fn white_king() -> Piece {
    Piece::king(Color::White)
}
