use super::super::{Board, Cell, Color, DIAGONALS};

impl Board {
    /// Flying captures: slide to the first occupied cell; if it is an enemy,
    /// every empty cell directly behind it is a landing.
    ///
    /// At most one piece is jumped per direction. The run of landings stops
    /// at the next occupied cell or the edge.
    pub(crate) fn king_captures(&self, from: Cell, color: Color) -> Vec<Cell> {
        let mut landings = Vec::new();
        for dir in DIAGONALS {
            let mut step = 1;
            while self.is_empty_cell(from.offset(dir, step)) {
                step += 1;
            }
            let victim = from.offset(dir, step);
            match self.piece_at(victim) {
                Some(p) if p.color != color => {}
                _ => continue,
            }
            step += 1;
            while self.is_empty_cell(from.offset(dir, step)) {
                landings.push(from.offset(dir, step));
                step += 1;
            }
        }
        landings
    }

    /// Full diagonal slides up to, not including, the first occupied cell.
    pub(crate) fn king_quiet_moves(&self, from: Cell) -> Vec<Cell> {
        let mut targets = Vec::new();
        for dir in DIAGONALS {
            let mut step = 1;
            while self.is_empty_cell(from.offset(dir, step)) {
                targets.push(from.offset(dir, step));
                step += 1;
            }
        }
        targets
    }
}
