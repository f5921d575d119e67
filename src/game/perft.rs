use super::GameState;

impl GameState {
    /// Count leaf nodes `depth` plies ahead, where each committed step is one
    /// ply, including chain continuations by the same player.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let mut next = self.clone();
            if next.play(mv.from, mv.to).is_ok() {
                nodes += next.perft(depth - 1);
            }
        }
        nodes
    }
}
