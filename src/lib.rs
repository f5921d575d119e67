/// Emit a `log` record when the `logging` feature is enabled.
macro_rules! log_event {
    ($lvl:ident, $($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::$lvl!($($arg)+);
    };
}

pub mod board;
pub mod game;
pub mod protocol;

pub use board::{Board, Cell, Color, Move, Outcome, Piece};
pub use game::{CommitResult, GameState};
