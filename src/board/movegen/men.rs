use super::super::{Board, Cell, Color, DIAGONALS};

impl Board {
    /// Short hops over an adjacent enemy, in all four directions.
    ///
    /// Men capture backward even though they only step forward.
    pub(crate) fn man_captures(&self, from: Cell, color: Color) -> Vec<Cell> {
        let mut landings = Vec::new();
        for dir in DIAGONALS {
            let victim = from.offset(dir, 1);
            let landing = from.offset(dir, 2);
            let is_enemy = self
                .piece_at(victim)
                .is_some_and(|p| p.color != color);
            if is_enemy && self.is_empty_cell(landing) {
                landings.push(landing);
            }
        }
        landings
    }

    /// The two forward diagonal steps, when empty.
    pub(crate) fn man_quiet_moves(&self, from: Cell, color: Color) -> Vec<Cell> {
        let dr = color.forward();
        [(dr, -1), (dr, 1)]
            .into_iter()
            .map(|dir| from.offset(dir, 1))
            .filter(|&to| self.is_empty_cell(to))
            .collect()
    }
}
