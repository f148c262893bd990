use crate::util::Coord;

/// A cell uncovered by a reveal, with the hint to draw on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RevealedCell {
    pub x: u16,
    pub y: u16,
    pub hint: u8,
}

impl RevealedCell {
    pub fn coord(&self) -> Coord {
        (self.x, self.y)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealResult {
    /// A mine was hit.
    Loss,
    /// The last safe cell was uncovered. Cells revealed by this move are not
    /// listed.
    Win,
    /// Cells newly revealed by this move. Empty when the target was already
    /// revealed.
    Progress(Vec<RevealedCell>),
}

impl RevealResult {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Loss | Self::Win)
    }
}
