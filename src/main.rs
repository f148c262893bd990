use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use log::info;
use minesweeper_engine::{App, MinesweeperArgs};
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::io;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = MinesweeperArgs::parse();

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .wrap_err_with(|| format!("cannot create log file {}", path.display()))?;
        WriteLogger::init(args.log_level, Config::default(), file)?;
    }

    let mut app = App::new(args.width, args.height, args.mines, args.rng())
        .wrap_err("cannot start a game")?;
    let state = app.run(io::stdin().lock(), io::stdout().lock())?;
    info!("session ended: {state:?}");
    Ok(())
}
