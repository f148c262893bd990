use crate::cell::{Cell, hint_char};
use crate::error::{BoardError, ConfigProblem};
use crate::reveal::{RevealResult, RevealedCell};
use crate::util::{Coord, i_xy, valid_neighbors, xy_i};
use crate::win_state::GameState;
use rand::Rng;
use std::fmt;
use std::fmt::{Display, Formatter, Write};

/// The game engine: grid, mine layout and reveal rules.
///
/// Mines and hints are fixed when the board is built. Afterwards only the
/// revealed flags change, through [`Board::reveal`].
#[derive(Clone, Debug)]
pub struct Board {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    mines: Vec<Coord>,
    safe_cells: u32,
    revealed_cells: u32,
    exploded: Option<Coord>,
    // utility field to ensure it's only allocated once
    point_stack: Vec<Coord>,
}

fn check_dimensions(width: u16, height: u16, mines: u32) -> Result<u32, BoardError> {
    if width == 0 {
        return Err(ConfigProblem::ZeroWidth.into());
    }
    if height == 0 {
        return Err(ConfigProblem::ZeroHeight.into());
    }
    let cells = width as u32 * height as u32;
    if mines >= cells {
        return Err(ConfigProblem::TooManyMines { mines, cells }.into());
    }
    Ok(cells)
}

impl Board {
    /// Builds a board with `mines` mines at uniformly random, distinct
    /// positions drawn from `rng`.
    pub fn new<R: Rng>(
        width: u16,
        height: u16,
        mines: u32,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let cells = check_dimensions(width, height, mines)?;
        let mut board = Self::empty(width, height, cells, mines);

        // duplicates are rejected by set_mine and simply drawn again
        while board.mines.len() < mines as usize {
            let x = rng.random_range(0..width);
            let y = rng.random_range(0..height);
            board.set_mine((x, y));
        }

        Ok(board)
    }

    /// Same as [`Board::new`], drawing from the thread-local generator.
    pub fn random(width: u16, height: u16, mines: u32) -> Result<Self, BoardError> {
        Self::new(width, height, mines, &mut rand::rng())
    }

    /// Builds a board with mines at exactly the given positions.
    pub fn with_mines(
        width: u16,
        height: u16,
        mines: impl IntoIterator<Item = Coord>,
    ) -> Result<Self, BoardError> {
        let mines: Vec<Coord> = mines.into_iter().collect();
        let count = u32::try_from(mines.len()).unwrap_or(u32::MAX);
        let cells = check_dimensions(width, height, count)?;
        let mut board = Self::empty(width, height, cells, count);

        for (x, y) in mines {
            if xy_i((x, y), width, height).is_none() {
                return Err(ConfigProblem::MineOutOfBounds { x, y }.into());
            }
            if !board.set_mine((x, y)) {
                return Err(ConfigProblem::DuplicateMine { x, y }.into());
            }
        }

        Ok(board)
    }

    fn empty(width: u16, height: u16, cells: u32, mines: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); cells as usize],
            mines: Vec::with_capacity(mines as usize),
            safe_cells: cells - mines,
            revealed_cells: 0,
            exploded: None,
            point_stack: Vec::new(),
        }
    }

    /// Returns false if the cell is off the board or already a mine.
    fn set_mine(&mut self, coord: Coord) -> bool {
        let (w, h) = (self.width, self.height);
        let Some(i) = xy_i(coord, w, h) else {
            return false;
        };
        if self.cells[i].mine {
            return false;
        }

        self.cells[i].mine = true;
        self.mines.push(coord);
        for neigh in valid_neighbors(coord, w, h) {
            if let Some(j) = xy_i(neigh, w, h) {
                self.cells[j].hint += 1;
            }
        }
        true
    }

    /// Reveals the cell at `(x, y)`, flooding outwards through zero hints.
    ///
    /// Once the game is won or lost every call returns that same outcome,
    /// whatever the coordinates, and changes nothing.
    pub fn reveal(&mut self, x: u16, y: u16) -> Result<RevealResult, BoardError> {
        match self.state() {
            GameState::Lost => return Ok(RevealResult::Loss),
            GameState::Won => return Ok(RevealResult::Win),
            GameState::InProgress => {}
        }

        let (w, h) = (self.width, self.height);
        let Some(i) = xy_i((x, y), w, h) else {
            return Err(BoardError::OutOfBounds {
                x,
                y,
                width: w,
                height: h,
            });
        };

        if self.cells[i].mine {
            self.exploded = Some((x, y));
            return Ok(RevealResult::Loss);
        }

        let mut revealed = Vec::new();
        self.point_stack.clear();
        self.point_stack.push((x, y));

        while let Some(coord) = self.point_stack.pop() {
            let Some(i) = xy_i(coord, w, h) else {
                continue;
            };
            let cell = &mut self.cells[i];
            if cell.revealed {
                continue;
            }

            cell.revealed = true;
            self.revealed_cells += 1;
            revealed.push(RevealedCell {
                x: coord.0,
                y: coord.1,
                hint: cell.hint,
            });

            // a zero hint means no neighbour is a mine
            if cell.hint == 0 {
                self.point_stack.extend(valid_neighbors(coord, w, h));
            }
        }

        if self.revealed_cells == self.safe_cells {
            Ok(RevealResult::Win)
        } else {
            Ok(RevealResult::Progress(revealed))
        }
    }

    pub fn state(&self) -> GameState {
        if self.exploded.is_some() {
            GameState::Lost
        } else if self.revealed_cells == self.safe_cells {
            GameState::Won
        } else {
            GameState::InProgress
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.state().is_terminal()
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn mine_count(&self) -> u32 {
        self.mines.len() as u32
    }

    /// Number of cells that must be revealed to win.
    pub fn safe_cells(&self) -> u32 {
        self.safe_cells
    }

    pub fn revealed_count(&self) -> u32 {
        self.revealed_cells
    }

    /// All mine positions, in placement order.
    pub fn mines(&self) -> &[Coord] {
        &self.mines
    }

    /// The mine that ended the game, if one did.
    pub fn exploded(&self) -> Option<Coord> {
        self.exploded
    }

    pub fn cell(&self, x: u16, y: u16) -> Result<&Cell, BoardError> {
        self.get((x, y)).ok_or(BoardError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        xy_i(coord, self.width, self.height).map(|i| &self.cells[i])
    }

    /// Every cell with its position, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        let (w, h) = (self.width, self.height);
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| i_xy(i, w, h).map(|xy| (xy, cell)))
    }

    /// What a player is allowed to see, for printing.
    pub fn player_view(&self) -> PlayerView<'_> {
        PlayerView(self)
    }
}

/// Prints the full solution, one row per line.
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for line in self.cells.chunks_exact(self.width as usize) {
            for (i, cell) in line.iter().enumerate() {
                if i > 0 {
                    f.write_char(' ')?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Hidden cells as `#`, revealed ones as `.` or their hint. Mines show as `*`
/// once the game is lost.
pub struct PlayerView<'a>(&'a Board);

impl Display for PlayerView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let lost = board.state() == GameState::Lost;
        for line in board.cells.chunks_exact(board.width as usize) {
            for cell in line {
                let c = match (cell.revealed, cell.mine) {
                    (_, true) if lost => '*',
                    (false, _) => '#',
                    (true, _) if cell.hint == 0 => '.',
                    (true, _) => hint_char(cell.hint),
                };
                f.write_char(c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    // 5x3 with a wall of mines down the middle column
    fn walled() -> Board {
        Board::with_mines(5, 3, [(2, 0), (2, 1), (2, 2)]).unwrap()
    }

    fn invalid(result: Result<Board, BoardError>) -> ConfigProblem {
        match result {
            Err(BoardError::InvalidConfiguration(problem)) => problem,
            Err(e) => panic!("unexpected error {e}"),
            Ok(_) => panic!("board should have been rejected"),
        }
    }

    #[test]
    fn rejects_invalid_configuration() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            invalid(Board::new(0, 5, 0, &mut rng)),
            ConfigProblem::ZeroWidth
        );
        assert_eq!(
            invalid(Board::new(5, 0, 0, &mut rng)),
            ConfigProblem::ZeroHeight
        );
        assert_eq!(
            invalid(Board::new(3, 3, 9, &mut rng)),
            ConfigProblem::TooManyMines { mines: 9, cells: 9 }
        );
        assert_eq!(
            invalid(Board::new(3, 3, 50, &mut rng)),
            ConfigProblem::TooManyMines {
                mines: 50,
                cells: 9
            }
        );
        assert_eq!(
            invalid(Board::with_mines(1, 1, [(0, 0)])),
            ConfigProblem::TooManyMines { mines: 1, cells: 1 }
        );
        assert_eq!(
            invalid(Board::with_mines(3, 3, [(3, 0)])),
            ConfigProblem::MineOutOfBounds { x: 3, y: 0 }
        );
        assert_eq!(
            invalid(Board::with_mines(3, 3, [(1, 1), (1, 1)])),
            ConfigProblem::DuplicateMine { x: 1, y: 1 }
        );
    }

    #[test]
    fn places_exact_mine_count_with_consistent_hints() {
        for (seed, (w, h, m)) in [(4, 4, 0), (9, 9, 10), (16, 16, 40), (30, 16, 99), (3, 3, 8)]
            .into_iter()
            .enumerate()
        {
            let mut rng = StdRng::seed_from_u64(seed as u64);
            let board = Board::new(w, h, m, &mut rng).unwrap();

            assert_eq!(board.cells().filter(|(_, c)| c.is_mine()).count(), m as usize);
            assert_eq!(board.mine_count(), m);
            assert_eq!(board.safe_cells(), w as u32 * h as u32 - m);
            let distinct: HashSet<Coord> = board.mines().iter().copied().collect();
            assert_eq!(distinct.len(), m as usize);

            let all_hints: u32 = board.cells().map(|(_, c)| c.hint() as u32).sum();
            let all_neighbors: u32 = board
                .mines()
                .iter()
                .map(|&mine| valid_neighbors(mine, w, h).count() as u32)
                .sum();
            assert_eq!(all_hints, all_neighbors);

            let safe_hints: u32 = board
                .cells()
                .filter(|(_, c)| !c.is_mine())
                .map(|(_, c)| c.hint() as u32)
                .sum();
            let safe_neighbors: u32 = board
                .mines()
                .iter()
                .flat_map(|&mine| valid_neighbors(mine, w, h))
                .filter(|&n| !board.get(n).unwrap().is_mine())
                .count() as u32;
            assert_eq!(safe_hints, safe_neighbors);
        }
    }

    #[test]
    fn seeded_construction_is_reproducible() {
        let layout = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = Board::new(12, 7, 20, &mut rng).unwrap();
            let mut mines = board.mines().to_vec();
            mines.sort();
            mines
        };
        assert_eq!(layout(42), layout(42));
    }

    #[test]
    fn win_on_last_safe_cell() {
        let mut board = Board::with_mines(1, 2, [(0, 1)]).unwrap();
        assert_eq!(board.reveal(0, 0).unwrap(), RevealResult::Win);
        assert_eq!(board.state(), GameState::Won);
        assert_eq!(board.revealed_count(), 1);
        assert_eq!(board.reveal(0, 1).unwrap(), RevealResult::Win);
        assert_eq!(board.state(), GameState::Won);
    }

    #[test]
    fn loss_on_mine() {
        let mut board = Board::with_mines(1, 2, [(0, 1)]).unwrap();
        assert_eq!(board.reveal(0, 1).unwrap(), RevealResult::Loss);
        assert_eq!(board.state(), GameState::Lost);
        assert_eq!(board.exploded(), Some((0, 1)));
        assert!(!board.cell(0, 1).unwrap().is_revealed());
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn loss_is_terminal() {
        let mut board = Board::with_mines(5, 1, [(2, 0)]).unwrap();
        assert_eq!(
            board.reveal(0, 0).unwrap(),
            RevealResult::Progress(vec![
                RevealedCell { x: 0, y: 0, hint: 0 },
                RevealedCell { x: 1, y: 0, hint: 1 },
            ])
        );
        assert_eq!(board.reveal(2, 0).unwrap(), RevealResult::Loss);
        assert!(board.is_terminal());

        assert_eq!(board.reveal(4, 0).unwrap(), RevealResult::Loss);
        assert_eq!(board.reveal(99, 99).unwrap(), RevealResult::Loss);
        assert_eq!(board.revealed_count(), 2);
        assert!(!board.cell(4, 0).unwrap().is_revealed());
    }

    #[test]
    fn revealing_twice_yields_nothing_new() {
        let mut board = walled();
        board.reveal(0, 0).unwrap();
        let count = board.revealed_count();

        assert_eq!(board.reveal(0, 0).unwrap(), RevealResult::Progress(vec![]));
        assert_eq!(board.reveal(1, 1).unwrap(), RevealResult::Progress(vec![]));
        assert_eq!(board.revealed_count(), count);
    }

    #[test]
    fn numbered_cell_reveals_only_itself() {
        let mut board = walled();
        assert_eq!(
            board.reveal(3, 1).unwrap(),
            RevealResult::Progress(vec![RevealedCell { x: 3, y: 1, hint: 3 }])
        );
        assert_eq!(board.revealed_count(), 1);
    }

    #[test]
    fn flood_fill_stops_at_numbered_frontier() {
        let mut board = walled();
        let RevealResult::Progress(cells) = board.reveal(0, 0).unwrap() else {
            panic!("expected progress");
        };

        let got: HashSet<RevealedCell> = cells.iter().copied().collect();
        let expected: HashSet<RevealedCell> = [
            (0, 0, 0),
            (0, 1, 0),
            (0, 2, 0),
            (1, 0, 2),
            (1, 1, 3),
            (1, 2, 2),
        ]
        .into_iter()
        .map(|(x, y, hint)| RevealedCell { x, y, hint })
        .collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(got, expected);
        assert_eq!(board.revealed_count(), 6);
        for x in 3..5 {
            for y in 0..3 {
                assert!(!board.cell(x, y).unwrap().is_revealed());
            }
        }

        assert_eq!(board.reveal(4, 1).unwrap(), RevealResult::Win);
        assert_eq!(board.revealed_count(), board.safe_cells());
    }

    #[test]
    fn flood_fill_from_zero_corner_clears_small_board() {
        let mut board = Board::with_mines(3, 3, [(2, 2)]).unwrap();
        assert_eq!(board.cell(0, 0).unwrap().hint(), 0);
        assert_eq!(board.cell(1, 1).unwrap().hint(), 1);

        assert_eq!(board.reveal(0, 0).unwrap(), RevealResult::Win);
        assert_eq!(board.revealed_count(), 8);
        assert!(!board.cell(2, 2).unwrap().is_revealed());
    }

    #[test]
    fn board_without_mines_is_won_in_one_move() {
        let mut board = Board::with_mines(4, 2, Vec::<Coord>::new()).unwrap();
        assert_eq!(board.reveal(3, 1).unwrap(), RevealResult::Win);
        assert_eq!(board.revealed_count(), 8);
    }

    #[test]
    fn out_of_bounds_reveal_changes_nothing() {
        let mut board = walled();
        board.reveal(0, 0).unwrap();

        assert_eq!(
            board.reveal(5, 0),
            Err(BoardError::OutOfBounds {
                x: 5,
                y: 0,
                width: 5,
                height: 3
            })
        );
        assert!(board.reveal(0, 3).is_err());
        assert_eq!(board.revealed_count(), 6);
        assert_eq!(board.state(), GameState::InProgress);
        assert!(board.cell(5, 0).is_err());
    }

    #[test]
    fn solution_rendering() {
        let board = Board::with_mines(3, 3, [(2, 2)]).unwrap();
        assert_eq!(board.to_string(), "- - -\n- 1 1\n- 1 X\n");
    }

    #[test]
    fn player_view_rendering() {
        let mut board = walled();
        assert_eq!(board.player_view().to_string(), "#####\n#####\n#####\n");

        board.reveal(0, 0).unwrap();
        assert_eq!(board.player_view().to_string(), ".2###\n.3###\n.2###\n");

        board.reveal(2, 1).unwrap();
        assert_eq!(board.player_view().to_string(), ".2*##\n.3*##\n.2*##\n");
    }
}
