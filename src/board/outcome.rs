use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color};

/// Result of the piece-extinction check.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    InProgress,
    WhiteWins,
    BlackWins,
}

impl Outcome {
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::InProgress => None,
            Outcome::WhiteWins => Some(Color::White),
            Outcome::BlackWins => Some(Color::Black),
        }
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::WhiteWins => write!(f, "White wins"),
            Outcome::BlackWins => write!(f, "Black wins"),
        }
    }
}

impl Board {
    /// A side with no pieces left has lost.
    ///
    /// A side that still has pieces but no legal move is not treated as lost.
    #[must_use]
    pub fn check_win(&self) -> Outcome {
        match self.piece_counts() {
            [0, 0] => Outcome::InProgress,
            [_, 0] => Outcome::WhiteWins,
            [0, _] => Outcome::BlackWins,
            _ => Outcome::InProgress,
        }
    }
}
