use super::{Board, Cell, Move, MoveKind, PieceKind};

/// What a single applied step did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct StepEffect {
    pub captured: Option<Cell>,
    pub promoted: bool,
}

impl Board {
    /// Relocate, remove the jumped piece, then crown on the far row.
    ///
    /// Legality is the caller's job; an empty source leaves the board
    /// untouched and reports no effect.
    pub(crate) fn apply_step(&mut self, mv: Move) -> StepEffect {
        let Some(piece) = self.piece_at(mv.from) else {
            return StepEffect {
                captured: None,
                promoted: false,
            };
        };

        let captured = match mv.kind {
            MoveKind::Capture => self.captured_cell(mv.from, mv.to),
            MoveKind::Quiet => None,
        };

        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(piece));
        if let Some(victim) = captured {
            self.set_piece(victim, None);
        }

        let promoted = piece.kind == PieceKind::Man
            && mv.to.row() == piece.color.promotion_row(self.size());
        if promoted {
            self.set_piece(mv.to, Some(piece.crowned()));
        }

        StepEffect { captured, promoted }
    }
}
