use std::str::FromStr;

use mineboard_core::{Coord, Coord2};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Primary action on a tile.
    Open(Coord2),
    /// Secondary action on a tile, marks or unmarks it.
    Mark(Coord2),
    NewGame,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty input")]
    Empty,
    #[error("Unknown command {0:?}, try \"help\"")]
    Unknown(String),
    #[error("Expected two coordinates, as in \"{0} 3 4\"")]
    MissingCoords(&'static str),
    #[error("Invalid coordinate {0:?}")]
    InvalidCoord(String),
}

pub const HELP: &str = "\
open X Y  (o)  open the tile at column X, row Y
mark X Y  (m)  mark or unmark the tile
new       (n)  deal a new board
quit      (q)  leave";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandError::Empty);
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "o" | "open" => Command::Open(parse_coords(&mut words, "open")?),
            "m" | "mark" => Command::Mark(parse_coords(&mut words, "mark")?),
            "n" | "new" => Command::NewGame,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(verb.to_string())),
        };

        match words.next() {
            Some(extra) => Err(CommandError::Unknown(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn parse_coords<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    verb: &'static str,
) -> Result<Coord2, CommandError> {
    let (Some(x), Some(y)) = (words.next(), words.next()) else {
        return Err(CommandError::MissingCoords(verb));
    };
    Ok((parse_coord(x)?, parse_coord(y)?))
}

fn parse_coord(word: &str) -> Result<Coord, CommandError> {
    word.parse()
        .map_err(|_| CommandError::InvalidCoord(word.to_string()))
}
