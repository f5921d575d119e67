#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolCommand {
    Options,
    SetOption(Vec<String>),
    New,
    Position(String),
    Select(Vec<String>),
    Move(Vec<String>),
    Deselect,
    Show,
    Moves,
    Perft(usize),
    Outcome,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Option<ProtocolCommand> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.is_empty() {
        return None;
    }

    let args = || parts[1..].iter().map(|p| (*p).to_string()).collect::<Vec<String>>();

    let cmd = match parts[0] {
        "options" => ProtocolCommand::Options,
        "setoption" => ProtocolCommand::SetOption(args()),
        "new" => ProtocolCommand::New,
        "position" => ProtocolCommand::Position(parts[1..].join(" ")),
        "select" => ProtocolCommand::Select(args()),
        "move" => ProtocolCommand::Move(args()),
        "deselect" => ProtocolCommand::Deselect,
        "show" => ProtocolCommand::Show,
        "moves" => ProtocolCommand::Moves,
        "perft" => {
            let depth = parts.get(1).and_then(|v| v.parse::<usize>().ok()).unwrap_or(1);
            ProtocolCommand::Perft(depth)
        }
        "outcome" => ProtocolCommand::Outcome,
        "quit" => ProtocolCommand::Quit,
        _ => ProtocolCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_is_ignored() {
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn test_select_keeps_arguments() {
        assert_eq!(
            parse_command("select 2 1"),
            Some(ProtocolCommand::Select(vec!["2".to_string(), "1".to_string()]))
        );
    }

    #[test]
    fn test_position_rejoins_rest_of_line() {
        assert_eq!(
            parse_command("position 8/8/8/8/8/8/8/8   w"),
            Some(ProtocolCommand::Position("8/8/8/8/8/8/8/8 w".to_string()))
        );
    }

    #[test]
    fn test_perft_defaults_to_depth_one() {
        assert_eq!(parse_command("perft"), Some(ProtocolCommand::Perft(1)));
        assert_eq!(parse_command("perft 3"), Some(ProtocolCommand::Perft(3)));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(
            parse_command("castle"),
            Some(ProtocolCommand::Unknown("castle".to_string()))
        );
    }
}
