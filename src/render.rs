use std::thread::sleep;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::style::Color;

use crate::config::{COLOR_BACKGROUND, COLOR_FOOD, COLOR_SNAKE, COLOR_TEXT, GAME_OVER_TEXT};
use crate::game::GameState;
use crate::grid::Position;

/// Something a game frame can be painted on.
pub trait Surface {
    fn clear(&mut self, background: Color) -> Result<()>;

    /// Fills one grid cell. Cells off the surface are skipped.
    fn draw_cell(&mut self, pos: Position, color: Color) -> Result<()>;

    fn draw_centered_text(&mut self, text: &str, color: Color) -> Result<()>;

    fn present(&mut self) -> Result<()>;

    /// Blocks until the current frame has used up its share of `fps`.
    fn throttle(&mut self, fps: u32);
}

pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, state: &GameState) -> Result<()> {
    surface.clear(COLOR_BACKGROUND)?;
    for &pos in state.snake().segments() {
        surface.draw_cell(pos, COLOR_SNAKE)?;
    }
    surface.draw_cell(state.food().position(), COLOR_FOOD)?;
    surface.present()
}

pub fn draw_game_over<S: Surface + ?Sized>(surface: &mut S) -> Result<()> {
    surface.clear(COLOR_BACKGROUND)?;
    surface.draw_centered_text(GAME_OVER_TEXT, COLOR_TEXT)?;
    surface.present()
}

/// Caps the frame rate by sleeping away what is left of each frame.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock { last_tick: None }
    }

    /// Returns how long the clock slept. The first call never sleeps.
    pub fn tick(&mut self, fps: u32) -> Duration {
        let budget = frame_budget(fps);
        let remaining = match self.last_tick {
            Some(last) => budget.saturating_sub(last.elapsed()),
            None => Duration::ZERO,
        };

        if !remaining.is_zero() {
            sleep(remaining);
        }

        self.last_tick = Some(Instant::now());
        remaining
    }
}

fn frame_budget(fps: u32) -> Duration {
    if fps == 0 {
        Duration::ZERO
    } else {
        Duration::from_secs(1) / fps
    }
}
