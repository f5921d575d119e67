//! Cell coordinates.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four diagonal step directions as (row delta, col delta).
pub const DIAGONALS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// A cell on the board, represented as (row, col).
///
/// A `Cell` is a plain coordinate pair and may lie off the board; use
/// [`Board::is_on_board`](crate::board::Board::is_on_board) before indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell(pub i32, pub i32); // (row, col)

impl Cell {
    #[inline]
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Cell(row, col)
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> i32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> i32 {
        self.1
    }

    /// The cell `steps` away along direction `(dr, dc)`.
    #[inline]
    #[must_use]
    pub const fn offset(self, (dr, dc): (i32, i32), steps: i32) -> Self {
        Cell(self.0 + dr * steps, self.1 + dc * steps)
    }

    /// True for the dark squares that pieces live on.
    #[inline]
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.0 + self.1).rem_euclid(2) == 1
    }

    /// Row distance to `other`.
    #[inline]
    #[must_use]
    pub const fn row_distance(self, other: Cell) -> i32 {
        (self.0 - other.0).abs()
    }

    /// Unit diagonal direction from `self` to `other`, if they share a diagonal.
    #[must_use]
    pub fn direction_to(self, other: Cell) -> Option<(i32, i32)> {
        let dr = other.0 - self.0;
        let dc = other.1 - self.1;
        if dr == 0 || dr.abs() != dc.abs() {
            return None;
        }
        Some((dr.signum(), dc.signum()))
    }

    /// Cells strictly between `self` and `other` along their shared diagonal.
    ///
    /// Empty when the two cells are adjacent or not on a common diagonal.
    #[must_use]
    pub fn cells_between(self, other: Cell) -> Vec<Cell> {
        match self.direction_to(other) {
            Some(dir) => (1..self.row_distance(other))
                .map(|step| self.offset(dir, step))
                .collect(),
            None => Vec::new(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Cell(row, col)
    }
}
