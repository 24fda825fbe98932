//! Commands typed at the interactive prompt.

use std::str::FromStr;

use pupiletra_core::Position;
use pupiletra_generator::{ParseSeedError, PuzzleSeed};

/// A command read from the prompt.
///
/// Cell coordinates are typed 1-based (`row col`) and stored 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Press at the first cell, pass through the line to the second, release.
    Drag {
        /// Where the pointer is pressed.
        from: Position,
        /// Where the pointer is released.
        to: Position,
    },
    /// Press the pointer on a cell.
    PointerDown(Position),
    /// Move the pressed pointer onto a cell.
    PointerEnter(Position),
    /// Release the pointer.
    PointerUp,
    /// Reveal every word.
    Reveal,
    /// Start a new puzzle, optionally from a seed.
    NewPuzzle(Option<PuzzleSeed>),
    /// Print the current seed.
    ShowSeed,
    /// List the words with their found state.
    ShowWords,
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Errors raised while parsing a prompt line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseActionError {
    /// The line held no command.
    #[display("empty command")]
    Empty,
    /// The command name is not known.
    #[display("unknown command `{name}`")]
    UnknownCommand {
        /// The command name as typed.
        name: String,
    },
    /// The command got the wrong number of arguments.
    #[display("`{command}` expects {expected} argument(s), got {actual}")]
    ArgumentCount {
        /// Canonical command name.
        command: &'static str,
        /// Number of arguments the command takes.
        expected: usize,
        /// Number of arguments given.
        actual: usize,
    },
    /// A coordinate was not a positive integer.
    #[display("invalid coordinate `{value}`: rows and columns start at 1")]
    InvalidCoordinate {
        /// The coordinate as typed.
        value: String,
    },
    /// The seed given to `new` was malformed.
    #[display("invalid seed: {_0}")]
    InvalidSeed(ParseSeedError),
}

/// Text printed by the `help` command.
pub const HELP: &str = "\
Commands (rows and columns start at 1):
  drag R1 C1 R2 C2  select the straight line from (R1, C1) to (R2, C2)
  down R C          press the pointer on a cell
  enter R C         drag the pressed pointer onto a cell
  up                release the pointer
  reveal            show every word
  new [SEED]        start a new puzzle, optionally from a 64-digit hex seed
  seed              print the current seed
  words             list the words to find
  help              print this list
  quit              leave the game";

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Err(ParseActionError::Empty);
        };
        let args: Vec<&str> = tokens.collect();

        let action = match name.to_ascii_lowercase().as_str() {
            "drag" | "d" => {
                expect_args("drag", &args, 4)?;
                Action::Drag {
                    from: parse_position(args[0], args[1])?,
                    to: parse_position(args[2], args[3])?,
                }
            }
            "down" => {
                expect_args("down", &args, 2)?;
                Action::PointerDown(parse_position(args[0], args[1])?)
            }
            "enter" => {
                expect_args("enter", &args, 2)?;
                Action::PointerEnter(parse_position(args[0], args[1])?)
            }
            "up" => {
                expect_args("up", &args, 0)?;
                Action::PointerUp
            }
            "reveal" => {
                expect_args("reveal", &args, 0)?;
                Action::Reveal
            }
            "new" => match args.as_slice() {
                [] => Action::NewPuzzle(None),
                [seed] => Action::NewPuzzle(Some(
                    seed.parse().map_err(ParseActionError::InvalidSeed)?,
                )),
                _ => {
                    return Err(ParseActionError::ArgumentCount {
                        command: "new",
                        expected: 1,
                        actual: args.len(),
                    });
                }
            },
            "seed" => {
                expect_args("seed", &args, 0)?;
                Action::ShowSeed
            }
            "words" | "w" => {
                expect_args("words", &args, 0)?;
                Action::ShowWords
            }
            "help" | "?" => Action::Help,
            "quit" | "exit" | "q" => Action::Quit,
            _ => {
                return Err(ParseActionError::UnknownCommand {
                    name: name.to_owned(),
                });
            }
        };
        Ok(action)
    }
}

fn expect_args(
    command: &'static str,
    args: &[&str],
    expected: usize,
) -> Result<(), ParseActionError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ParseActionError::ArgumentCount {
            command,
            expected,
            actual: args.len(),
        })
    }
}

fn parse_position(row: &str, col: &str) -> Result<Position, ParseActionError> {
    Ok(Position::new(parse_coordinate(row)?, parse_coordinate(col)?))
}

fn parse_coordinate(value: &str) -> Result<usize, ParseActionError> {
    value
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| ParseActionError::InvalidCoordinate {
            value: value.to_owned(),
        })
}
