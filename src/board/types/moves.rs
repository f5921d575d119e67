//! Move types and legal destination sets.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// Whether a step jumps an enemy piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Quiet,
    Capture,
}

/// A single step of one piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Cell,
    pub to: Cell,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn quiet(from: Cell, to: Cell) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::Quiet,
        }
    }

    #[inline]
    #[must_use]
    pub const fn capture(from: Cell, to: Cell) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::Capture,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        matches!(self.kind, MoveKind::Capture)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{sep}{}", self.from, self.to)
    }
}

/// Destinations reachable by one piece, all of a single [`MoveKind`].
///
/// Captures and quiet moves are never mixed in one set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegalMoves {
    origin: Cell,
    kind: MoveKind,
    destinations: Vec<Cell>,
}

impl LegalMoves {
    #[must_use]
    pub(crate) fn new(origin: Cell, kind: MoveKind, destinations: Vec<Cell>) -> Self {
        LegalMoves {
            origin,
            kind,
            destinations,
        }
    }

    #[inline]
    #[must_use]
    pub fn origin(&self) -> Cell {
        self.origin
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.destinations.contains(&cell)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Cell] {
        &self.destinations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.destinations.iter()
    }

    /// The set as full moves from the origin.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.destinations.iter().map(move |&to| Move {
            from: self.origin,
            to,
            kind: self.kind,
        })
    }
}

impl<'a> IntoIterator for &'a LegalMoves {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.destinations.iter()
    }
}
