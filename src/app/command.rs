//! Operator commands and their argument parsing.

use thiserror::Error;

/// A top-level command typed at the action prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tick,
    Kill,
    Stats,
    Quit,
    Unknown(String),
}

impl Command {
    /// Parses one line of input. Blank lines yield `None`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let action = input.trim();
        if action.is_empty() {
            return None;
        }
        Some(match action.to_lowercase().as_str() {
            "tick" => Self::Tick,
            "kill" => Self::Kill,
            "stats" => Self::Stats,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(action.to_string()),
        })
    }
}

/// Errors raised while talking to the operator.
///
/// `InvalidNumber` is recoverable and only reported; `Io` ends the session.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses a tick count. Negative and fractional values are rejected.
pub fn parse_ticks(input: &str) -> Result<u64, CommandError> {
    let value = input.trim();
    value
        .parse::<u64>()
        .map_err(|_| CommandError::InvalidNumber(value.to_string()))
}

/// Parses a poison amount. Any finite number is accepted.
pub fn parse_poison(input: &str) -> Result<f64, CommandError> {
    let value = input.trim();
    match value.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(CommandError::InvalidNumber(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::parse("tick\n"), Some(Command::Tick));
        assert_eq!(Command::parse("  kill "), Some(Command::Kill));
        assert_eq!(Command::parse("STATS"), Some(Command::Stats));
        assert_eq!(Command::parse("quit"), Some(Command::Quit));
        assert_eq!(Command::parse("exit"), Some(Command::Quit));
    }

    #[test]
    fn test_parse_unknown_and_blank() {
        assert_eq!(
            Command::parse("divide"),
            Some(Command::Unknown("divide".to_string()))
        );
        assert_eq!(Command::parse("   \n"), None);
    }

    #[test]
    fn test_parse_ticks() {
        assert_eq!(parse_ticks("5\n").unwrap(), 5);
        assert_eq!(parse_ticks("0").unwrap(), 0);
        assert!(matches!(
            parse_ticks("five"),
            Err(CommandError::InvalidNumber(s)) if s == "five"
        ));
        assert!(parse_ticks("-3").is_err());
        assert!(parse_ticks("2.5").is_err());
    }

    #[test]
    fn test_parse_poison() {
        assert_eq!(parse_poison("1000").unwrap(), 1000.0);
        assert_eq!(parse_poison(" 2.5 ").unwrap(), 2.5);
        assert!(parse_poison("lots").is_err());
        assert!(parse_poison("inf").is_err());
        assert!(parse_poison("NaN").is_err());
    }

    #[test]
    fn test_error_display() {
        let err = CommandError::InvalidNumber("abc".to_string());
        assert_eq!(err.to_string(), "Invalid number: abc");
    }
}
