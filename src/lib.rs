//! Rule engine for Minesweeper: mine placement, hints, flood-fill reveals and
//! win/loss detection, plus a small line-driven front end over it.

mod action;
mod app;
mod args;
mod board;
mod cell;
mod error;
mod reveal;
mod util;
mod win_state;

pub use action::{Action, ActionError};
pub use app::App;
pub use args::MinesweeperArgs;
pub use board::{Board, PlayerView};
pub use cell::Cell;
pub use error::{BoardError, ConfigProblem};
pub use reveal::{RevealResult, RevealedCell};
pub use util::Coord;
pub use win_state::GameState;
