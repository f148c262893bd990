#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GameState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}
