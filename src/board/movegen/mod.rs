mod kings;
mod men;

use super::{Board, Cell, Color, LegalMoves, Move, MoveKind, PieceKind};

impl Board {
    /// Capture landing cells for the piece on `cell`.
    ///
    /// Empty when the cell is empty or off the board.
    #[must_use]
    pub fn find_captures(&self, cell: Cell) -> Vec<Cell> {
        match self.piece_at(cell) {
            Some(p) if p.kind == PieceKind::Man => self.man_captures(cell, p.color),
            Some(p) => self.king_captures(cell, p.color),
            None => Vec::new(),
        }
    }

    /// Non-capturing destinations for the piece on `cell`.
    ///
    /// Ignores mandatory capture; callers decide whether quiet moves are
    /// allowed at all.
    #[must_use]
    pub fn find_quiet_moves(&self, cell: Cell) -> Vec<Cell> {
        match self.piece_at(cell) {
            Some(p) if p.kind == PieceKind::Man => self.man_quiet_moves(cell, p.color),
            Some(_) => self.king_quiet_moves(cell),
            None => Vec::new(),
        }
    }

    /// True if any piece of `player` can capture. Recomputed from scratch on
    /// every call.
    #[must_use]
    pub fn has_any_capture(&self, player: Color) -> bool {
        self.pieces_of(player)
            .any(|(cell, _)| !self.find_captures(cell).is_empty())
    }

    /// Legal destinations for the piece on `cell` under the given
    /// mandatory-capture state.
    ///
    /// Captures win whenever the piece has any. Otherwise the set holds quiet
    /// moves, or is an empty capture set when a capture is mandatory elsewhere.
    #[must_use]
    pub fn legal_moves_from(&self, cell: Cell, must_capture: bool) -> LegalMoves {
        let captures = self.find_captures(cell);
        if !captures.is_empty() || must_capture {
            LegalMoves::new(cell, MoveKind::Capture, captures)
        } else {
            LegalMoves::new(cell, MoveKind::Quiet, self.find_quiet_moves(cell))
        }
    }

    /// Every legal step for `player`: all captures if any exist, else all quiet moves.
    #[must_use]
    pub fn generate_moves(&self, player: Color) -> Vec<Move> {
        let must_capture = self.has_any_capture(player);
        let mut moves = Vec::new();
        for (cell, _) in self.pieces_of(player) {
            moves.extend(self.legal_moves_from(cell, must_capture).moves());
        }
        moves
    }

    /// The piece a capture from `from` to `to` jumps: the only occupied cell
    /// strictly between them on their diagonal.
    #[must_use]
    pub fn captured_cell(&self, from: Cell, to: Cell) -> Option<Cell> {
        let mut occupied = from
            .cells_between(to)
            .into_iter()
            .filter(|&c| self.piece_at(c).is_some());
        match (occupied.next(), occupied.next()) {
            (Some(victim), None) => Some(victim),
            _ => None,
        }
    }
}
