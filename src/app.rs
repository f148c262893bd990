use crate::action::Action;
use crate::board::Board;
use crate::error::BoardError;
use crate::reveal::RevealResult;
use crate::win_state::GameState;
use color_eyre::Result;
use log::{debug, info, warn};
use rand::Rng;
use std::io::{BufRead, Write};

enum Flow {
    Continue,
    Stop,
}

/// A line-driven front end. It owns one board at a time and forwards parsed
/// commands into it; ending the session on a win or loss is decided here.
#[derive(Debug)]
pub struct App<G> {
    board: Board,
    rng: G,
}

impl<G: Rng> App<G> {
    /// Construct a new instance of [`App`] with a random board.
    pub fn new(width: u16, height: u16, mines: u32, mut rng: G) -> Result<Self, BoardError> {
        let board = Board::new(width, height, mines, &mut rng)?;
        info!("new game: {width}x{height} with {mines} mines");
        Ok(Self { board, rng })
    }

    /// Start from a prepared board. Restarts draw new layouts from `rng`.
    pub fn with_board(board: Board, rng: G) -> Self {
        Self { board, rng }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the board with a fresh one of the same size and mine count.
    pub fn restart(&mut self) -> Result<(), BoardError> {
        let (w, h, m) = (
            self.board.width(),
            self.board.height(),
            self.board.mine_count(),
        );
        self.board = Board::new(w, h, m, &mut self.rng)?;
        info!("restarted: {w}x{h} with {m} mines");
        Ok(())
    }

    /// Run until input ends, the player quits or the game is decided.
    pub fn run<I: BufRead, O: Write>(&mut self, input: I, mut out: O) -> Result<GameState> {
        write!(out, "{}", self.board.player_view())?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let action = match line.parse::<Action>() {
                Ok(action) => action,
                Err(e) => {
                    warn!("{e}");
                    writeln!(out, "error: {e}")?;
                    continue;
                }
            };

            if let Flow::Stop = self.apply(action, &mut out)? {
                break;
            }
        }

        out.flush()?;
        Ok(self.board.state())
    }

    fn apply<O: Write>(&mut self, action: Action, out: &mut O) -> Result<Flow> {
        match action {
            Action::Reveal((x, y)) => return self.reveal(x, y, out),
            Action::Show => write!(out, "{}", self.board.player_view())?,
            Action::Restart => {
                self.restart()?;
                writeln!(
                    out,
                    "new game: {}x{} with {} mines",
                    self.board.width(),
                    self.board.height(),
                    self.board.mine_count()
                )?;
                write!(out, "{}", self.board.player_view())?;
            }
            Action::Quit => return Ok(Flow::Stop),
        }
        Ok(Flow::Continue)
    }

    fn reveal<O: Write>(&mut self, x: u16, y: u16, out: &mut O) -> Result<Flow> {
        let result = match self.board.reveal(x, y) {
            Ok(result) => result,
            Err(e) => {
                warn!("reveal rejected: {e}");
                writeln!(out, "error: {e}")?;
                return Ok(Flow::Continue);
            }
        };

        match result {
            RevealResult::Loss => {
                info!("lost on ({x},{y})");
                writeln!(out, "boom! ({x},{y}) was a mine")?;
                write!(out, "{}", self.board.player_view())?;
                Ok(Flow::Stop)
            }
            RevealResult::Win => {
                info!("won after {} reveals", self.board.revealed_count());
                writeln!(out, "you won!")?;
                write!(out, "{}", self.board)?;
                Ok(Flow::Stop)
            }
            RevealResult::Progress(cells) => {
                debug!("({x},{y}) uncovered {} cells", cells.len());
                if cells.is_empty() {
                    writeln!(out, "({x},{y}) is already revealed")?;
                } else {
                    let listed: Vec<String> = cells
                        .iter()
                        .map(|c| format!("({},{}):{}", c.x, c.y, c.hint))
                        .collect();
                    writeln!(out, "revealed {}", listed.join(" "))?;
                }
                write!(out, "{}", self.board.player_view())?;
                Ok(Flow::Continue)
            }
        }
    }
}
