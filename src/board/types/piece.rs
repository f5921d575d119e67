//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Checkers colors. White starts on the low rows and moves toward higher rows.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a man's quiet step (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn forward(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row on which a man of this color is crowned
    #[inline]
    #[must_use]
    pub const fn promotion_row(self, size: usize) -> i32 {
        match self {
            Color::White => size as i32 - 1,
            Color::Black => 0,
        }
    }

    /// Side-to-move letter used in position notation
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Man or king.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Man,
    King,
}

/// An occupied cell's content. Empty cells are `None` on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn man(color: Color) -> Self {
        Piece {
            color,
            kind: PieceKind::Man,
        }
    }

    #[inline]
    #[must_use]
    pub const fn king(color: Color) -> Self {
        Piece {
            color,
            kind: PieceKind::King,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// The same piece after crowning.
    #[inline]
    #[must_use]
    pub const fn crowned(self) -> Self {
        Piece::king(self.color)
    }

    /// Parse a notation character (`w`, `W`, `b`, `B`)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'w' => Some(Piece::man(Color::White)),
            'W' => Some(Piece::king(Color::White)),
            'b' => Some(Piece::man(Color::Black)),
            'B' => Some(Piece::king(Color::Black)),
            _ => None,
        }
    }

    /// Notation character: lowercase for men, uppercase for kings
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Man) => 'w',
            (Color::White, PieceKind::King) => 'W',
            (Color::Black, PieceKind::Man) => 'b',
            (Color::Black, PieceKind::King) => 'B',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            PieceKind::Man => "man",
            PieceKind::King => "king",
        };
        write!(f, "{} {kind}", self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_roundtrip() {
        for c in ['w', 'W', 'b', 'B'] {
            assert_eq!(Piece::from_char(c).map(Piece::to_char), Some(c));
        }
        assert_eq!(Piece::from_char('x'), None);
    }

    #[test]
    fn test_promotion_rows() {
        assert_eq!(Color::White.promotion_row(8), 7);
        assert_eq!(Color::Black.promotion_row(8), 0);
        assert_eq!(Color::White.promotion_row(10), 9);
    }

    #[test]
    fn test_crowning_keeps_color() {
        let king = Piece::man(Color::Black).crowned();
        assert!(king.is_king());
        assert_eq!(king.color, Color::Black);
    }
}
