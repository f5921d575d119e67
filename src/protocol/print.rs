use std::fmt;

use crate::board::{Cell, Move};
use crate::game::GameState;

/// Grid of the current board. Legal destinations show as `*` and the
/// selected piece is bracketed when `show_moves` is on.
#[must_use]
pub fn render_game(game: &GameState, show_moves: bool) -> String {
    GameView { game, show_moves }.to_string()
}

struct GameView<'a> {
    game: &'a GameState,
    show_moves: bool,
}

impl fmt::Display for GameView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.game;
        let board = game.board();
        let n = board.size() as i32;
        let selected = game.selection().map(|s| s.origin()).filter(|_| self.show_moves);
        let targets = if self.show_moves { game.legal_destinations() } else { &[] };

        for row in (0..n).rev() {
            write!(f, "{row:>2} ")?;
            for col in 0..n {
                let cell = Cell(row, col);
                let c = match board.piece_at(cell) {
                    Some(piece) => piece.to_char(),
                    None if targets.contains(&cell) => '*',
                    None if cell.is_dark() => '.',
                    None => ' ',
                };
                let lead = if selected == Some(cell) {
                    '['
                } else if selected.map(|s| s.offset((0, 1), 1)) == Some(cell) {
                    ']'
                } else {
                    ' '
                };
                write!(f, "{lead}{c}")?;
            }
            if selected == Some(Cell(row, n - 1)) {
                write!(f, "]")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for col in 0..n {
            write!(f, "{:>2}", col % 10)?;
        }
        write!(f, "\nturn {} must-capture {}", game.to_move(), game.must_capture())?;
        if let Some(at) = game.chain_origin() {
            write!(f, " chain {at}")?;
        }
        Ok(())
    }
}

#[must_use]
pub fn format_moves(moves: &[Move]) -> String {
    let list: Vec<String> = moves.iter().map(Move::to_string).collect();
    format!("moves {}", list.join(" "))
}

#[must_use]
pub fn format_cells(cells: &[Cell]) -> String {
    let list: Vec<String> = cells.iter().map(Cell::to_string).collect();
    list.join(" ")
}
