//! Line commands understood by the driver.

use derive_more::{Display, Error};
use std::str::FromStr;
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use tracing::instrument;

/// Command keywords, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
enum Keyword {
    #[strum(to_string = "move", serialize = "m")]
    Move,
    #[strum(to_string = "jump", serialize = "j")]
    Jump,
    Reset,
    Status,
    History,
    #[strum(to_string = "help", serialize = "?")]
    Help,
    #[strum(to_string = "quit", serialize = "exit", serialize = "q")]
    Quit,
}

/// A parsed driver command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark at the cell index.
    Move(usize),
    /// Jump to a recorded move number.
    Jump(usize),
    /// Start over.
    Reset,
    /// Print the board and status line.
    Status,
    /// Print the move list.
    History,
    /// Print usage.
    Help,
    /// Leave the session.
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Blank input.
    #[display("Empty command")]
    Empty,
    /// First word is not a known command.
    #[display("Unknown command '{}'", _0)]
    Unknown(#[error(not(source))] String),
    /// `move`/`jump` without a number.
    #[display("'{}' needs a number", _0)]
    MissingArgument(#[error(not(source))] &'static str),
    /// Argument is not a non-negative integer.
    #[display("'{}' is not a valid number", _0)]
    BadNumber(#[error(not(source))] String),
    /// Extra words after the command.
    #[display("Unexpected input '{}'", _0)]
    Trailing(#[error(not(source))] String),
}

impl FromStr for Command {
    type Err = CommandError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let word = words.next().ok_or(CommandError::Empty)?;
        let keyword = Keyword::from_str(word)
            .map_err(|_| CommandError::Unknown(word.to_string()))?;

        let mut number = || -> Result<usize, CommandError> {
            let name: &'static str = keyword.into();
            let arg = words.next().ok_or(CommandError::MissingArgument(name))?;
            arg.parse().map_err(|_| CommandError::BadNumber(arg.to_string()))
        };

        let command = match keyword {
            Keyword::Move => Command::Move(number()?),
            Keyword::Jump => Command::Jump(number()?),
            Keyword::Reset => Command::Reset,
            Keyword::Status => Command::Status,
            Keyword::History => Command::History,
            Keyword::Help => Command::Help,
            Keyword::Quit => Command::Quit,
        };

        let rest: Vec<&str> = words.collect();
        if !rest.is_empty() {
            return Err(CommandError::Trailing(rest.join(" ")));
        }
        Ok(command)
    }
}

/// Usage text listing every command.
pub fn help() -> String {
    Keyword::iter()
        .map(|keyword| match keyword {
            Keyword::Move => "move <cell>   place a mark on cell 0-8",
            Keyword::Jump => "jump <n>      view the board after move n",
            Keyword::Reset => "reset         start a new game",
            Keyword::Status => "status        show the board",
            Keyword::History => "history       list recorded moves",
            Keyword::Help => "help          show this text",
            Keyword::Quit => "quit          leave",
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("move 4".parse::<Command>(), Ok(Command::Move(4)));
        assert_eq!("  JUMP   2 ".parse::<Command>(), Ok(Command::Jump(2)));
        assert_eq!("m 0".parse::<Command>(), Ok(Command::Move(0)));
        assert_eq!("reset".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("?".parse::<Command>(), Ok(Command::Help));
    }

    #[test]
    fn test_negative_number_rejected() {
        assert_eq!(
            "jump -1".parse::<Command>(),
            Err(CommandError::BadNumber("-1".to_string()))
        );
    }

    #[test]
    fn test_missing_and_trailing_arguments() {
        assert_eq!("move".parse::<Command>(), Err(CommandError::MissingArgument("move")));
        assert_eq!(
            "status now".parse::<Command>(),
            Err(CommandError::Trailing("now".to_string()))
        );
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "undo".parse::<Command>(),
            Err(CommandError::Unknown("undo".to_string()))
        );
    }

    #[test]
    fn test_help_lists_every_keyword() {
        assert_eq!(help().lines().count(), Keyword::iter().count());
    }
}
