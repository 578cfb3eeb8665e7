use std::time::Duration;

use crossterm::style::Color;

pub const FPS: u32 = 5;

pub const GRID_WIDTH: i32 = 40;
pub const GRID_HEIGHT: i32 = 30;

/// Terminal columns per grid cell. A cell is always one row tall, and
/// terminal characters are roughly twice as tall as they are wide.
pub const CELL_SIZE: u16 = 2;

pub const TITLE: &str = "Snake";
pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const GAME_OVER_PAUSE: Duration = Duration::from_secs(2);

pub const COLOR_BACKGROUND: Color = Color::Rgb { r: 255, g: 255, b: 255 };
pub const COLOR_SNAKE: Color = Color::Rgb { r: 0, g: 0, b: 255 };
pub const COLOR_FOOD: Color = Color::Rgb { r: 100, g: 255, b: 100 };
pub const COLOR_TEXT: Color = Color::Rgb { r: 0, g: 200, b: 0 };

pub const LOG_FILE: &str = "snake.log";
