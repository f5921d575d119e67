//! Error types for board and game operations.
//!
//! Every error here is a rejection: the operation that returned it left the
//! board and game state untouched.

use std::fmt;

use super::{Cell, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Error type for unsupported board sizes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardSizeError {
    /// Size outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`
    OutOfRange { size: usize },
}

impl fmt::Display for BoardSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardSizeError::OutOfRange { size } => write!(
                f,
                "Board size {size} out of range (must be {MIN_BOARD_SIZE}-{MAX_BOARD_SIZE})"
            ),
        }
    }
}

impl std::error::Error for BoardSizeError {}

/// Error type for position notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Nothing to parse
    Empty,
    /// Rows were given without a side to move
    MissingSide,
    /// Side to move is not 'w' or 'b'
    InvalidSide { found: String },
    /// Invalid piece character in a row
    InvalidPiece { char: char },
    /// A row does not have as many cells as there are rows
    RowLength {
        row: usize,
        found: usize,
        expected: usize,
    },
    /// Number of rows is not a supported board size
    Size(BoardSizeError),
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::Empty => write!(f, "Empty position string"),
            PositionError::MissingSide => write!(f, "Position is missing the side to move"),
            PositionError::InvalidSide { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            PositionError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in position")
            }
            PositionError::RowLength {
                row,
                found,
                expected,
            } => write!(f, "Row {row} has {found} cells, expected {expected}"),
            PositionError::Size(e) => write!(f, "Invalid position: {e}"),
        }
    }
}

impl std::error::Error for PositionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PositionError::Size(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardSizeError> for PositionError {
    fn from(e: BoardSizeError) -> Self {
        PositionError::Size(e)
    }
}

/// Error type for rejected piece selections
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Cell is off the board
    InvalidCoordinate { cell: Cell },
    /// No piece on the cell
    EmptyCell { cell: Cell },
    /// Piece belongs to the player not on move
    NotOwner { cell: Cell },
    /// A capture exists elsewhere and this piece has none
    CaptureRequired { cell: Cell },
    /// A capture chain must be continued from `at`
    ChainInProgress { at: Cell },
    /// The game has already been won
    GameOver,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::InvalidCoordinate { cell } => {
                write!(f, "Cell {cell} is off the board")
            }
            SelectionError::EmptyCell { cell } => write!(f, "Cell {cell} is empty"),
            SelectionError::NotOwner { cell } => {
                write!(f, "Piece on {cell} belongs to the other player")
            }
            SelectionError::CaptureRequired { cell } => {
                write!(f, "Capture is mandatory and the piece on {cell} cannot capture")
            }
            SelectionError::ChainInProgress { at } => {
                write!(f, "Capture chain must continue from {at}")
            }
            SelectionError::GameOver => write!(f, "Game is over"),
        }
    }
}

impl std::error::Error for SelectionError {}

/// Error type for rejected move commits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Source or destination is off the board
    InvalidCoordinate { cell: Cell },
    /// `from` is not the currently selected piece
    NoSelection { from: Cell },
    /// Destination is not in the selected piece's legal set
    NotLegal { from: Cell, to: Cell },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidCoordinate { cell } => write!(f, "Cell {cell} is off the board"),
            MoveError::NoSelection { from } => write!(f, "No piece selected on {from}"),
            MoveError::NotLegal { from, to } => write!(f, "Illegal move {from} -> {to}"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for a combined select-and-commit step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    Select(SelectionError),
    Move(MoveError),
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::Select(e) => write!(f, "{e}"),
            PlayError::Move(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlayError::Select(e) => Some(e),
            PlayError::Move(e) => Some(e),
        }
    }
}

impl From<SelectionError> for PlayError {
    fn from(e: SelectionError) -> Self {
        PlayError::Select(e)
    }
}

impl From<MoveError> for PlayError {
    fn from(e: MoveError) -> Self {
        PlayError::Move(e)
    }
}
