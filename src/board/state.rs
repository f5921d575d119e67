use super::error::BoardSizeError;
use super::{Cell, Color, Piece};

/// Standard board edge length.
pub const DEFAULT_BOARD_SIZE: usize = 8;
/// Smallest supported board; three home rows per side must fit.
pub const MIN_BOARD_SIZE: usize = 6;
pub const MAX_BOARD_SIZE: usize = 16;
/// Rows filled with men for each side in the starting layout.
pub const HOME_ROWS: usize = 3;

/// An N×N grid of cells, each empty or holding one piece.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// The standard 8×8 starting layout.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::blank(DEFAULT_BOARD_SIZE);
        board.place_starting_men();
        board
    }

    /// Starting layout on a `size`×`size` board.
    pub fn with_size(size: usize) -> Result<Self, BoardSizeError> {
        let mut board = Board::empty(size)?;
        board.place_starting_men();
        Ok(board)
    }

    /// A board with no pieces.
    pub fn empty(size: usize) -> Result<Self, BoardSizeError> {
        check_size(size)?;
        Ok(Board::blank(size))
    }

    pub(crate) fn blank(size: usize) -> Self {
        Board {
            size,
            cells: vec![None; size * size],
        }
    }

    /// White men on the low home rows, Black men on the high ones, dark cells only.
    fn place_starting_men(&mut self) {
        let n = self.size as i32;
        let home = HOME_ROWS as i32;
        for row in 0..n {
            let color = if row < home {
                Color::White
            } else if row >= n - home {
                Color::Black
            } else {
                continue;
            };
            for col in 0..n {
                let cell = Cell(row, col);
                if cell.is_dark() {
                    self.set_piece(cell, Some(Piece::man(color)));
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// True iff both coordinates lie in `[0, size)`.
    #[inline]
    #[must_use]
    pub fn is_on_board(&self, cell: Cell) -> bool {
        let n = self.size as i32;
        (0..n).contains(&cell.row()) && (0..n).contains(&cell.col())
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        if self.is_on_board(cell) {
            Some(cell.row() as usize * self.size + cell.col() as usize)
        } else {
            None
        }
    }

    /// The piece on `cell`, or `None` for empty and off-board cells.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, cell: Cell) -> Option<Piece> {
        self.index(cell).and_then(|idx| self.cells[idx])
    }

    /// True iff `cell` is on the board and holds no piece.
    #[inline]
    #[must_use]
    pub fn is_empty_cell(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|idx| self.cells[idx].is_none())
    }

    /// Overwrite a cell. Off-board cells are ignored and reported as `false`.
    pub(crate) fn set_piece(&mut self, cell: Cell, piece: Option<Piece>) -> bool {
        match self.index(cell) {
            Some(idx) => {
                self.cells[idx] = piece;
                true
            }
            None => false,
        }
    }

    /// Every occupied cell in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        let n = self.size;
        self.cells.iter().enumerate().filter_map(move |(idx, piece)| {
            piece.map(|p| (Cell((idx / n) as i32, (idx % n) as i32), p))
        })
    }

    /// Occupied cells belonging to `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// Number of pieces per color, indexed White=0, Black=1.
    #[must_use]
    pub fn piece_counts(&self) -> [usize; 2] {
        let mut counts = [0; 2];
        for (_, piece) in self.pieces() {
            counts[piece.color.index()] += 1;
        }
        counts
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

fn check_size(size: usize) -> Result<(), BoardSizeError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(BoardSizeError::OutOfRange { size })
    }
}
