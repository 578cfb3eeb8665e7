mod config;
mod food;
mod game;
mod grid;
mod input;
mod render;
mod snake;
mod term;

use std::fs::File;
use std::sync::Mutex;
use std::thread::sleep;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use config::{CELL_SIZE, GAME_OVER_PAUSE, GRID_HEIGHT, GRID_WIDTH, LOG_FILE, TITLE};
use grid::Grid;
use term::{TermInput, TermManager};

fn main() -> Result<()> {
    init_logging()?;

    let grid = Grid::new(GRID_WIDTH, GRID_HEIGHT);
    let mut term = TermManager::init(grid, CELL_SIZE, TITLE)?;

    // The terminal must be handed back even if the game loop fails
    let res = game::run(&mut term, &mut TermInput, grid, &mut rand::thread_rng());
    if res.is_ok() {
        sleep(GAME_OVER_PAUSE);
    }
    term.restore()?;

    res.map(|_| ())
}

/// Logs go to a file so they never scribble over the game screen, and only
/// when `RUST_LOG` asks for them.
fn init_logging() -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => return Ok(()),
    };

    let path = std::env::temp_dir().join(LOG_FILE);
    let file = File::create(&path).with_context(|| format!("Error creating log file {:?}", path))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
