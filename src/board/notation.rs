//! Text position notation, in the spirit of FEN.
//!
//! `<rows> <side>`: rows separated by `/`, from row n-1 down to row 0. Each
//! row uses `w`/`W` (White man/king), `b`/`B` (Black man/king), `.` for one
//! empty cell, or a digit run for that many empty cells.

use std::fmt;

use super::error::PositionError;
use super::{Board, Cell, Color, Piece};

impl Board {
    /// Parse a position, returning the board and the side to move.
    pub fn try_from_position(position: &str) -> Result<(Self, Color), PositionError> {
        let mut parts = position.split_whitespace();
        let rows_part = parts.next().ok_or(PositionError::Empty)?;
        let side_part = parts.next().ok_or(PositionError::MissingSide)?;

        let side = match side_part {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(PositionError::InvalidSide {
                    found: other.to_string(),
                })
            }
        };

        let rows: Vec<&str> = rows_part.split('/').collect();
        let size = rows.len();
        let mut board = Board::empty(size)?;

        for (i, row_str) in rows.iter().enumerate() {
            let row = (size - 1 - i) as i32;
            let too_long = |found: usize| PositionError::RowLength {
                row: row as usize,
                found,
                expected: size,
            };
            // Invariant: col + run <= size, so neither can grow past the row.
            let mut col = 0usize;
            let mut run = 0usize;
            for c in row_str.chars() {
                if let Some(d) = c.to_digit(10) {
                    run = run
                        .checked_mul(10)
                        .and_then(|r| r.checked_add(d as usize))
                        .ok_or_else(|| too_long(usize::MAX))?;
                    if col + run > size {
                        return Err(too_long(col + run));
                    }
                    continue;
                }
                col += run;
                run = 0;
                if c == '.' {
                    if col >= size {
                        return Err(too_long(col + 1));
                    }
                    col += 1;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(PositionError::InvalidPiece { char: c })?;
                if col >= size {
                    return Err(too_long(col + 1));
                }
                board.set_piece(Cell(row, col as i32), Some(piece));
                col += 1;
            }
            col += run;
            if col != size {
                return Err(too_long(col));
            }
        }

        Ok((board, side))
    }

    /// Render the board in position notation with `side` to move.
    #[must_use]
    pub fn to_position(&self, side: Color) -> String {
        let n = self.size() as i32;
        let mut rows: Vec<String> = Vec::with_capacity(self.size());
        for row in (0..n).rev() {
            let mut text = String::new();
            let mut empty = 0;
            for col in 0..n {
                match self.piece_at(Cell(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            text.push_str(&empty.to_string());
                            empty = 0;
                        }
                        text.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }
        format!("{} {}", rows.join("/"), side.to_char())
    }
}

/// Grid diagram, highest row first, with row and column labels.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size() as i32;
        for row in (0..n).rev() {
            write!(f, "{row:>2} ")?;
            for col in 0..n {
                let cell = Cell(row, col);
                let c = match self.piece_at(cell) {
                    Some(piece) => piece.to_char(),
                    None if cell.is_dark() => '.',
                    None => ' ',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for col in 0..n {
            write!(f, "{:>2}", col % 10)?;
        }
        writeln!(f)
    }
}
