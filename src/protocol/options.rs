use super::ProtocolError;
use crate::board::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionAction {
    ResetBoard(usize),
}

/// Session settings changed through `setoption`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    pub board_size: usize,
    pub show_moves: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions::new(DEFAULT_BOARD_SIZE)
    }
}

impl GameOptions {
    #[must_use]
    pub fn new(board_size: usize) -> Self {
        GameOptions {
            board_size,
            show_moves: true,
        }
    }

    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "option name BoardSize type spin default {} min {MIN_BOARD_SIZE} max {MAX_BOARD_SIZE}\n\
             option name ShowMoves type check default {}",
            self.board_size, self.show_moves
        )
    }

    /// Apply one option. Unknown names are ignored; a missing or
    /// unparsable value is rejected and leaves the options untouched.
    pub fn apply_setoption(
        &mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<Option<OptionAction>, ProtocolError> {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "boardsize" | "board size" => {
                let size = option_value(name, value, |v| v.parse::<usize>().ok())?
                    .clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
                if size != self.board_size {
                    self.board_size = size;
                    return Ok(Some(OptionAction::ResetBoard(size)));
                }
            }
            "showmoves" | "show moves" => {
                self.show_moves = option_value(name, value, parse_bool)?;
            }
            _ => {}
        }
        Ok(None)
    }
}

fn option_value<T>(
    name: &str,
    value: Option<&str>,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<T, ProtocolError> {
    let raw = value.ok_or(ProtocolError::MissingArgument { command: "setoption" })?;
    parse(raw.trim()).ok_or_else(|| ProtocolError::InvalidOptionValue {
        name: name.trim().to_string(),
        value: raw.to_string(),
    })
}

fn parse_bool(v: &str) -> Option<bool> {
    if v.eq_ignore_ascii_case("true") {
        Some(true)
    } else if v.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Split `name <words...> value <v>` arguments into name and value.
#[must_use]
pub fn parse_setoption(args: &[String]) -> Option<(String, Option<String>)> {
    let name_pos = args.iter().position(|a| a == "name")?;
    let value_pos = args.iter().position(|a| a == "value");
    let name_end = value_pos.unwrap_or(args.len());
    if name_end <= name_pos + 1 {
        return None;
    }
    let name = args[name_pos + 1..name_end].join(" ");
    let value = value_pos.and_then(|p| {
        let rest = &args[p + 1..];
        (!rest.is_empty()).then(|| rest.join(" "))
    });
    Some((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_parse_setoption() {
        assert_eq!(
            parse_setoption(&words("name Board Size value 10")),
            Some(("Board Size".to_string(), Some("10".to_string())))
        );
        assert_eq!(
            parse_setoption(&words("name ShowMoves")),
            Some(("ShowMoves".to_string(), None))
        );
        assert_eq!(parse_setoption(&words("value 3")), None);
    }

    #[test]
    fn test_board_size_is_clamped_and_resets() {
        let mut options = GameOptions::default();
        match options.apply_setoption("BoardSize", Some("40")) {
            Ok(Some(OptionAction::ResetBoard(size))) => assert_eq!(size, MAX_BOARD_SIZE),
            other => panic!("expected a reset, got {other:?}"),
        }
        assert_eq!(options.apply_setoption("boardsize", Some("16")), Ok(None));
    }

    #[test]
    fn test_bad_board_size_keeps_current_size() {
        let mut options = GameOptions::new(10);
        assert_eq!(
            options.apply_setoption("BoardSize", Some("abc")),
            Err(ProtocolError::InvalidOptionValue {
                name: "BoardSize".to_string(),
                value: "abc".to_string()
            })
        );
        assert_eq!(
            options.apply_setoption("BoardSize", None),
            Err(ProtocolError::MissingArgument { command: "setoption" })
        );
        assert_eq!(options.board_size, 10);
    }

    #[test]
    fn test_show_moves_toggle() {
        let mut options = GameOptions::default();
        assert!(options.show_moves);
        assert_eq!(options.apply_setoption("ShowMoves", Some("false")), Ok(None));
        assert!(!options.show_moves);
        assert_eq!(options.apply_setoption("show moves", Some("TRUE")), Ok(None));
        assert!(options.show_moves);
    }

    #[test]
    fn test_show_moves_rejects_non_booleans() {
        let mut options = GameOptions::default();
        for bad in ["yes", "1", "off"] {
            assert!(matches!(
                options.apply_setoption("ShowMoves", Some(bad)),
                Err(ProtocolError::InvalidOptionValue { .. })
            ));
        }
        assert!(options.show_moves);
    }

    #[test]
    fn test_unknown_option_is_ignored() {
        let mut options = GameOptions::default();
        assert_eq!(options.apply_setoption("Hash", Some("64")), Ok(None));
        assert_eq!(options, GameOptions::default());
    }
}
