//! Turn controller for a single game.
//!
//! `GameState` owns the board exclusively and carries the transient
//! selection context. All operations are synchronous and either complete or
//! reject without touching state.

mod controller;
mod perft;

pub use controller::{CommitResult, GameState};
