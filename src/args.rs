use clap::Parser;
use log::LevelFilter;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Command line minesweeper
#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
pub struct MinesweeperArgs {
    /// width
    #[arg(short = 'x', long, default_value_t = 10)]
    pub width: u16,
    /// height
    #[arg(short = 'y', long, default_value_t = 10)]
    pub height: u16,
    /// amount of mines
    #[arg(short, long, default_value_t = 7)]
    pub mines: u32,
    /// seed for a reproducible mine layout
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// write a log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl MinesweeperArgs {
    /// Seeded generator when `--seed` was given, OS entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
