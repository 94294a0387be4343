//! Command parsing for the terminal front-end.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
    #[error("'{command}' expects {expected}")]
    BadArguments {
        command: &'static str,
        expected: &'static str,
    },
}

/// Commands read from stdin, one per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pick up the piece on a cell.
    Select { row: i32, col: i32 },
    /// Move the selected piece to a cell.
    Move { row: i32, col: i32 },
    /// Pixel input, translated through the configured square size.
    Click { x: i32, y: i32 },
    /// List the moves available to the side to move.
    Moves,
    /// Print the board.
    Show,
    /// Print the position in layout notation.
    Layout,
    /// Start a new game.
    New,
    Help,
    Quit,
    /// Blank line.
    Empty,
}

impl Command {
    pub const HELP: &'static str = "\
commands:
  select <row> <col>   pick up the piece on a cell
  move <row> <col>     move the selected piece
  click <x> <y>        pixel input (selects own pieces, otherwise moves)
  moves                list available moves
  show                 print the board
  layout               print the position in layout notation
  new                  start a new game
  quit                 exit";

    /// Parses one input line.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let mut parts = input.split_whitespace();
        let Some(cmd) = parts.next() else {
            return Ok(Command::Empty);
        };
        let args: Vec<&str> = parts.collect();

        match cmd {
            "select" | "s" => {
                let (row, col) = Self::pair("select", "<row> <col>", &args)?;
                Ok(Command::Select { row, col })
            }
            "move" | "m" => {
                let (row, col) = Self::pair("move", "<row> <col>", &args)?;
                Ok(Command::Move { row, col })
            }
            "click" => {
                let (x, y) = Self::pair("click", "<x> <y>", &args)?;
                Ok(Command::Click { x, y })
            }
            "moves" => Ok(Command::Moves),
            "show" => Ok(Command::Show),
            "layout" => Ok(Command::Layout),
            "new" => Ok(Command::New),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }

    fn pair(
        command: &'static str,
        expected: &'static str,
        args: &[&str],
    ) -> Result<(i32, i32), CommandError> {
        let bad = || CommandError::BadArguments { command, expected };
        match args {
            [a, b] => Ok((a.parse().map_err(|_| bad())?, b.parse().map_err(|_| bad())?)),
            _ => Err(bad()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_select_and_move() {
        assert_eq!(
            Command::parse("select 2 3"),
            Ok(Command::Select { row: 2, col: 3 })
        );
        assert_eq!(
            Command::parse("  m 1 -4 "),
            Ok(Command::Move { row: 1, col: -4 })
        );
    }

    #[test]
    fn parse_click() {
        assert_eq!(
            Command::parse("click 175 120"),
            Ok(Command::Click { x: 175, y: 120 })
        );
    }

    #[test]
    fn parse_simple_commands() {
        assert_eq!(Command::parse(""), Ok(Command::Empty));
        assert_eq!(Command::parse("moves"), Ok(Command::Moves));
        assert_eq!(Command::parse("show"), Ok(Command::Show));
        assert_eq!(Command::parse("layout"), Ok(Command::Layout));
        assert_eq!(Command::parse("new"), Ok(Command::New));
        assert_eq!(Command::parse("?"), Ok(Command::Help));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Command::parse("jump 1 2"),
            Err(CommandError::Unknown("jump".to_string()))
        );
        let err = Command::parse("select 1").unwrap_err();
        assert_eq!(err.to_string(), "'select' expects <row> <col>");
        assert!(Command::parse("move a b").is_err());
        assert!(Command::parse("click 1 2 3").is_err());
    }
}
