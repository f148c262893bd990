use std::fmt;
use std::fmt::{Display, Formatter, Write};

/// One square of the grid. Pure data: whatever draws the cell is linked to it
/// by coordinate only.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub(crate) mine: bool,
    pub(crate) hint: u8,
    pub(crate) revealed: bool,
}

impl Cell {
    pub fn is_mine(&self) -> bool {
        self.mine
    }

    /// Number of mines among the up to 8 surrounding cells.
    ///
    /// Mines accumulate a count as well, but it carries no meaning for them.
    pub fn hint(&self) -> u8 {
        self.hint
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Solution view: `X` for a mine, the hint otherwise, `-` for zero.
impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match (self.mine, self.hint) {
            (true, _) => 'X',
            (false, 0) => '-',
            (false, n) => hint_char(n),
        };
        f.write_char(c)
    }
}

pub(crate) fn hint_char(n: u8) -> char {
    std::char::from_digit(n as u32, 10).unwrap_or('?')
}
