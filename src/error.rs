use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Construction parameters that cannot describe a playable board.
    InvalidConfiguration(ConfigProblem),
    /// A reveal aimed outside the grid. The board is left untouched.
    OutOfBounds {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigProblem {
    ZeroWidth,
    ZeroHeight,
    TooManyMines { mines: u32, cells: u32 },
    MineOutOfBounds { x: u16, y: u16 },
    DuplicateMine { x: u16, y: u16 },
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(problem) => {
                write!(f, "invalid board configuration: {problem}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(f, "({x},{y}) is outside the {width}x{height} board"),
        }
    }
}

impl Display for ConfigProblem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => f.write_str("width must be positive"),
            Self::ZeroHeight => f.write_str("height must be positive"),
            Self::TooManyMines { mines, cells } => write!(
                f,
                "{mines} mines leave no safe cell on a board of {cells} cells"
            ),
            Self::MineOutOfBounds { x, y } => write!(f, "mine at ({x},{y}) is off the board"),
            Self::DuplicateMine { x, y } => write!(f, "mine at ({x},{y}) is listed twice"),
        }
    }
}

impl Error for BoardError {}

impl From<ConfigProblem> for BoardError {
    fn from(problem: ConfigProblem) -> Self {
        Self::InvalidConfiguration(problem)
    }
}
