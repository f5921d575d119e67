use crate::board::{
    Board, BoardSizeError, Cell, Color, LegalMoves, Move, MoveError, MoveKind, Outcome, PlayError,
    PositionError, SelectionError,
};

/// What committing a step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommitResult {
    pub promoted: bool,
    /// The same piece must capture again from its new cell; the turn did not pass.
    pub continues_capture: bool,
    pub captured: Option<Cell>,
}

/// Board, side to move and selection context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    to_move: Color,
    must_capture: bool,
    selection: Option<LegalMoves>,
    chain: Option<Cell>,
    outcome: Outcome,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl GameState {
    /// Standard 8×8 game, White to move.
    #[must_use]
    pub fn new() -> Self {
        GameState::from_board(Board::new(), Color::White)
    }

    /// Starting layout on a `size`×`size` board, White to move.
    pub fn with_size(size: usize) -> Result<Self, BoardSizeError> {
        Ok(GameState::from_board(Board::with_size(size)?, Color::White))
    }

    /// Take over an arbitrary board with `to_move` on move.
    #[must_use]
    pub fn from_board(board: Board, to_move: Color) -> Self {
        let must_capture = board.has_any_capture(to_move);
        let outcome = board.check_win();
        GameState {
            board,
            to_move,
            must_capture,
            selection: None,
            chain: None,
            outcome,
        }
    }

    /// Build a game from position notation.
    pub fn from_position(position: &str) -> Result<Self, PositionError> {
        let (board, to_move) = Board::try_from_position(position)?;
        Ok(GameState::from_board(board, to_move))
    }

    #[must_use]
    pub fn to_position(&self) -> String {
        self.board.to_position(self.to_move)
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// True iff the side to move has a capture somewhere on the board.
    #[inline]
    #[must_use]
    pub fn must_capture(&self) -> bool {
        self.must_capture
    }

    #[inline]
    #[must_use]
    pub fn selection(&self) -> Option<&LegalMoves> {
        self.selection.as_ref()
    }

    /// Destinations to highlight for the current selection.
    #[must_use]
    pub fn legal_destinations(&self) -> &[Cell] {
        match &self.selection {
            Some(moves) => moves.as_slice(),
            None => &[],
        }
    }

    /// Cell a capture chain must continue from, if one is in progress.
    #[inline]
    #[must_use]
    pub fn chain_origin(&self) -> Option<Cell> {
        self.chain
    }

    #[inline]
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Select a piece of the side to move and compute its legal destinations.
    ///
    /// On rejection the previous selection, if any, is kept.
    pub fn select_piece(&mut self, cell: Cell) -> Result<&LegalMoves, SelectionError> {
        if self.outcome.is_over() {
            return Err(SelectionError::GameOver);
        }
        if !self.board.is_on_board(cell) {
            return Err(SelectionError::InvalidCoordinate { cell });
        }
        let piece = self
            .board
            .piece_at(cell)
            .ok_or(SelectionError::EmptyCell { cell })?;
        if piece.color != self.to_move {
            return Err(SelectionError::NotOwner { cell });
        }
        if let Some(at) = self.chain.filter(|&at| at != cell) {
            return Err(SelectionError::ChainInProgress { at });
        }

        let moves = self.board.legal_moves_from(cell, self.must_capture);
        if moves.kind() == MoveKind::Capture && moves.is_empty() {
            return Err(SelectionError::CaptureRequired { cell });
        }

        log_event!(debug, "{} selects {} ({} targets)", self.to_move, cell, moves.len());
        Ok(&*self.selection.insert(moves))
    }

    /// Drop the current selection. Refused while a capture chain is pending.
    pub fn deselect(&mut self) -> bool {
        if self.chain.is_some() {
            return false;
        }
        self.selection = None;
        true
    }

    /// Commit the selected piece's move from `from` to `to`.
    ///
    /// `to` must be in the legal set computed by the last successful
    /// [`select_piece`](Self::select_piece) for `from`.
    pub fn commit_move(&mut self, from: Cell, to: Cell) -> Result<CommitResult, MoveError> {
        for cell in [from, to] {
            if !self.board.is_on_board(cell) {
                return Err(MoveError::InvalidCoordinate { cell });
            }
        }
        let selection = self
            .selection
            .as_ref()
            .filter(|s| s.origin() == from)
            .ok_or(MoveError::NoSelection { from })?;
        if !selection.contains(to) {
            return Err(MoveError::NotLegal { from, to });
        }

        let mv = Move {
            from,
            to,
            kind: selection.kind(),
        };
        let effect = self.board.apply_step(mv);
        log_event!(debug, "{} plays {}", self.to_move, mv);
        if effect.promoted {
            log_event!(debug, "{} crowned on {}", self.to_move, to);
        }

        if mv.is_capture() {
            let next = self.board.find_captures(to);
            if !next.is_empty() {
                log_event!(debug, "{} must continue capturing from {}", self.to_move, to);
                self.chain = Some(to);
                self.must_capture = true;
                self.selection = Some(LegalMoves::new(to, MoveKind::Capture, next));
                return Ok(CommitResult {
                    promoted: effect.promoted,
                    continues_capture: true,
                    captured: effect.captured,
                });
            }
        }

        self.advance_turn();
        Ok(CommitResult {
            promoted: effect.promoted,
            continues_capture: false,
            captured: effect.captured,
        })
    }

    /// Select `from` and commit to `to` in one call.
    pub fn play(&mut self, from: Cell, to: Cell) -> Result<CommitResult, PlayError> {
        self.select_piece(from)?;
        Ok(self.commit_move(from, to)?)
    }

    /// Every step the side to move may take now; only the chaining piece
    /// while a chain is pending. Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.outcome.is_over() {
            return Vec::new();
        }
        match self.chain {
            Some(at) => self.board.legal_moves_from(at, true).moves().collect(),
            None => self.board.generate_moves(self.to_move),
        }
    }

    fn advance_turn(&mut self) {
        self.to_move = self.to_move.opponent();
        self.chain = None;
        self.selection = None;
        self.must_capture = self.board.has_any_capture(self.to_move);
        self.outcome = self.board.check_win();
        if self.outcome.is_over() {
            log_event!(info, "game over: {}", self.outcome);
        } else {
            log_event!(debug, "{} to move, must capture: {}", self.to_move, self.must_capture);
        }
    }
}
