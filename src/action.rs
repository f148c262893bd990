use crate::util::Coord;
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Reveal(Coord),
    Show,
    Restart,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionError {
    Unknown(String),
    BadCoordinate(String),
}

impl Display for ActionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(line) => write!(f, "unrecognised command `{line}`"),
            Self::BadCoordinate(token) => write!(f, "`{token}` is not a valid coordinate"),
        }
    }
}

impl Error for ActionError {}

fn coordinate(token: &str) -> Result<u16, ActionError> {
    token
        .parse()
        .map_err(|_| ActionError::BadCoordinate(token.to_string()))
}

/// Accepts `<x> <y>`, `reveal <x> <y>`, `show`, `new` and `quit`/`q`.
impl FromStr for Action {
    type Err = ActionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["q" | "quit"] => Ok(Self::Quit),
            ["show"] => Ok(Self::Show),
            ["new"] => Ok(Self::Restart),
            ["reveal", x, y] | [x, y] => Ok(Self::Reveal((coordinate(x)?, coordinate(y)?))),
            _ => Err(ActionError::Unknown(line.trim().to_string())),
        }
    }
}
