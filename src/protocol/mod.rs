//! Line-oriented text protocol driving a [`GameState`].
//!
//! The binary reads one command per line from stdin and answers with
//! `ok ...` / `error ...` lines. Cells are addressed as `<row> <col>`.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{BoardSizeError, Cell, MoveError, MoveKind, PositionError, SelectionError};
use crate::game::GameState;

pub mod command;
pub mod options;
pub mod print;

use command::{parse_command, ProtocolCommand};
use options::{parse_setoption, GameOptions, OptionAction};
use print::{format_cells, format_moves, render_game};

/// Error type for protocol commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// A command needs more arguments
    MissingArgument { command: &'static str },
    /// A coordinate is not an integer
    InvalidNumber { found: String },
    /// Malformed `setoption`
    InvalidOption,
    /// `setoption` value of the wrong type
    InvalidOptionValue { name: String, value: String },
    /// `move` without a selected piece
    NothingSelected,
    Position(PositionError),
    BoardSize(BoardSizeError),
    Selection(SelectionError),
    Move(MoveError),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::MissingArgument { command } => {
                write!(f, "Missing argument for '{command}'")
            }
            ProtocolError::InvalidNumber { found } => write!(f, "Invalid number '{found}'"),
            ProtocolError::InvalidOption => {
                write!(f, "Expected 'setoption name <name> [value <value>]'")
            }
            ProtocolError::InvalidOptionValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
            ProtocolError::NothingSelected => write!(f, "No piece selected"),
            ProtocolError::Position(e) => write!(f, "{e}"),
            ProtocolError::BoardSize(e) => write!(f, "{e}"),
            ProtocolError::Selection(e) => write!(f, "{e}"),
            ProtocolError::Move(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ProtocolError {}

impl From<PositionError> for ProtocolError {
    fn from(e: PositionError) -> Self {
        ProtocolError::Position(e)
    }
}

impl From<BoardSizeError> for ProtocolError {
    fn from(e: BoardSizeError) -> Self {
        ProtocolError::BoardSize(e)
    }
}

impl From<SelectionError> for ProtocolError {
    fn from(e: SelectionError) -> Self {
        ProtocolError::Selection(e)
    }
}

impl From<MoveError> for ProtocolError {
    fn from(e: MoveError) -> Self {
        ProtocolError::Move(e)
    }
}

/// Result of processing a protocol command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Command processed, with output to print
    Ok(String),
    /// Command rejected; game state unchanged
    Error(ProtocolError),
    /// Session should end
    Quit,
    /// Command not recognized
    Unknown(String),
}

/// Parse `<row> <col>` from the first two arguments.
pub fn parse_cell(args: &[String], command: &'static str) -> Result<Cell, ProtocolError> {
    let [row, col, ..] = args else {
        return Err(ProtocolError::MissingArgument { command });
    };
    let parse = |s: &String| {
        s.parse::<i32>()
            .map_err(|_| ProtocolError::InvalidNumber { found: s.clone() })
    };
    Ok(Cell(parse(row)?, parse(col)?))
}

/// One game plus its options.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub game: GameState,
    pub options: GameOptions,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Session::default()
    }

    /// Process a single command line.
    pub fn process_command(&mut self, line: &str) -> Option<CommandResult> {
        let cmd = parse_command(line)?;
        let result = match cmd {
            ProtocolCommand::Quit => CommandResult::Quit,
            ProtocolCommand::Unknown(text) => CommandResult::Unknown(text),
            cmd => match self.execute(cmd) {
                Ok(output) => CommandResult::Ok(output),
                Err(e) => CommandResult::Error(e),
            },
        };
        Some(result)
    }

    fn execute(&mut self, cmd: ProtocolCommand) -> Result<String, ProtocolError> {
        match cmd {
            ProtocolCommand::Options => Ok(format!("{}\nok", self.options.describe())),
            ProtocolCommand::SetOption(args) => {
                let (name, value) = parse_setoption(&args).ok_or(ProtocolError::InvalidOption)?;
                if let Some(OptionAction::ResetBoard(size)) =
                    self.options.apply_setoption(&name, value.as_deref())?
                {
                    self.game = GameState::with_size(size)?;
                }
                Ok("ok".to_string())
            }
            ProtocolCommand::New => {
                self.game = GameState::with_size(self.options.board_size)?;
                Ok("ok".to_string())
            }
            ProtocolCommand::Position(text) => {
                self.game = GameState::from_position(&text)?;
                self.options.board_size = self.game.board().size();
                Ok(format!("ok {}", self.game.to_position()))
            }
            ProtocolCommand::Select(args) => {
                let cell = parse_cell(&args, "select")?;
                let moves = self.game.select_piece(cell)?;
                Ok(format!(
                    "ok selected {cell} {}: {}",
                    if moves.kind() == MoveKind::Capture {
                        "capture"
                    } else {
                        "quiet"
                    },
                    format_cells(moves.as_slice())
                ))
            }
            ProtocolCommand::Move(args) => {
                let to = parse_cell(&args, "move")?;
                let from = self
                    .game
                    .selection()
                    .map(|s| s.origin())
                    .ok_or(ProtocolError::NothingSelected)?;
                let result = self.game.commit_move(from, to)?;
                let mut out = format!("ok {from} -> {to}");
                if let Some(victim) = result.captured {
                    out.push_str(&format!(" captured {victim}"));
                }
                if result.promoted {
                    out.push_str(" promoted");
                }
                if result.continues_capture {
                    out.push_str(" continue");
                }
                if self.game.outcome().is_over() {
                    out.push_str(&format!("\noutcome {}", self.game.outcome()));
                }
                Ok(out)
            }
            ProtocolCommand::Deselect => match self.game.chain_origin() {
                Some(at) => Err(SelectionError::ChainInProgress { at }.into()),
                None => {
                    self.game.deselect();
                    Ok("ok".to_string())
                }
            },
            ProtocolCommand::Show => Ok(render_game(&self.game, self.options.show_moves)),
            ProtocolCommand::Moves => Ok(format_moves(&self.game.legal_moves())),
            ProtocolCommand::Perft(depth) => Ok(format!(
                "perft {depth} nodes {}",
                self.game.perft(depth)
            )),
            ProtocolCommand::Outcome => Ok(format!("outcome {}", self.game.outcome())),
            ProtocolCommand::Quit | ProtocolCommand::Unknown(_) => Ok(String::new()),
        }
    }
}

/// Run the blocking stdin/stdout command loop.
pub fn run_loop() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let Some(result) = session.process_command(&line) else {
            continue;
        };
        let written = match result {
            CommandResult::Ok(output) => writeln!(stdout, "{output}"),
            CommandResult::Error(e) => writeln!(stdout, "error {e}"),
            CommandResult::Unknown(text) => writeln!(stdout, "error unknown command '{text}'"),
            CommandResult::Quit => break,
        };
        if written.and_then(|()| stdout.flush()).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    fn ok(session: &mut Session, line: &str) -> String {
        match session.process_command(line) {
            Some(CommandResult::Ok(out)) => out,
            other => panic!("'{line}' did not succeed: {other:?}"),
        }
    }

    #[test]
    fn test_parse_cell() {
        let args = vec!["3".to_string(), "2".to_string()];
        assert_eq!(parse_cell(&args, "select"), Ok(Cell(3, 2)));
        assert_eq!(
            parse_cell(&args[..1], "select"),
            Err(ProtocolError::MissingArgument { command: "select" })
        );
        assert_eq!(
            parse_cell(&["x".to_string(), "1".to_string()], "move"),
            Err(ProtocolError::InvalidNumber {
                found: "x".to_string()
            })
        );
    }

    #[test]
    fn test_select_and_move() {
        let mut session = Session::new();
        assert_eq!(
            ok(&mut session, "select 2 1"),
            "ok selected (2,1) quiet: (3,0) (3,2)"
        );
        assert_eq!(ok(&mut session, "move 3 2"), "ok (2,1) -> (3,2)");
        assert_eq!(session.game.to_move(), Color::Black);
    }

    #[test]
    fn test_move_without_selection() {
        let mut session = Session::new();
        assert_eq!(
            session.process_command("move 3 2"),
            Some(CommandResult::Error(ProtocolError::NothingSelected))
        );
    }

    #[test]
    fn test_capture_reports_victim_and_outcome() {
        let mut session = Session::new();
        ok(&mut session, "position 8/8/8/3b4/2w5/8/8/8 w");
        ok(&mut session, "select 3 2");
        assert_eq!(
            ok(&mut session, "move 5 4"),
            "ok (3,2) -> (5,4) captured (4,3)\noutcome White wins"
        );
    }

    #[test]
    fn test_rejected_selection_is_reported() {
        let mut session = Session::new();
        assert_eq!(
            session.process_command("select 5 0"),
            Some(CommandResult::Error(ProtocolError::Selection(
                SelectionError::NotOwner { cell: Cell(5, 0) }
            )))
        );
    }

    #[test]
    fn test_setoption_board_size_resets_game() {
        let mut session = Session::new();
        ok(&mut session, "setoption name BoardSize value 10");
        assert_eq!(session.game.board().size(), 10);
        assert_eq!(session.options.board_size, 10);
        assert_eq!(
            session.process_command("setoption BoardSize"),
            Some(CommandResult::Error(ProtocolError::InvalidOption))
        );
    }

    #[test]
    fn test_bad_option_value_keeps_game() {
        let mut session = Session::new();
        ok(&mut session, "select 2 1");
        ok(&mut session, "move 3 2");
        let before = session.game.to_position();
        assert!(matches!(
            session.process_command("setoption name BoardSize value abc"),
            Some(CommandResult::Error(ProtocolError::InvalidOptionValue { .. }))
        ));
        assert!(matches!(
            session.process_command("setoption name ShowMoves value yes"),
            Some(CommandResult::Error(ProtocolError::InvalidOptionValue { .. }))
        ));
        assert_eq!(session.game.to_position(), before);
        assert_eq!(session.options, GameOptions::default());
    }

    #[test]
    fn test_oversized_position_is_an_error() {
        let mut session = Session::new();
        let line = format!("position {}/8/8/8/8/8/8/8 w", "9".repeat(25));
        assert!(matches!(
            session.process_command(&line),
            Some(CommandResult::Error(ProtocolError::Position(
                PositionError::RowLength { .. }
            )))
        ));
        assert_eq!(session.game.to_position(), GameState::new().to_position());
    }

    #[test]
    fn test_show_marks_destinations() {
        let mut session = Session::new();
        ok(&mut session, "select 2 1");
        let grid = ok(&mut session, "show");
        assert!(grid.contains('*'));
        assert!(grid.ends_with("turn White must-capture false"));
        ok(&mut session, "setoption name ShowMoves value false");
        assert!(!ok(&mut session, "show").contains('*'));
    }

    #[test]
    fn test_perft_and_moves() {
        let mut session = Session::new();
        assert_eq!(ok(&mut session, "perft 2"), "perft 2 nodes 49");
        assert!(ok(&mut session, "moves").starts_with("moves (2,1)-(3,0)"));
    }

    #[test]
    fn test_quit_and_unknown() {
        let mut session = Session::new();
        assert_eq!(session.process_command("quit"), Some(CommandResult::Quit));
        assert_eq!(
            session.process_command("fly 1 2"),
            Some(CommandResult::Unknown("fly 1 2".to_string()))
        );
        assert_eq!(session.process_command(""), None);
    }
}
