use anyhow::Result;
use rand::Rng;
use tracing::{debug, info, trace};

use crate::config::FPS;
use crate::food::Food;
use crate::grid::Grid;
use crate::input::InputSource;
use crate::render::{draw_frame, draw_game_over, Surface};
use crate::snake::{Direction, Snake};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    Moved,
    Ate,
    Crashed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    grid: Grid,
    snake: Snake,
    food: Food,
    direction: Direction,
    alive: bool,
}

impl GameState {
    pub fn new<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Self {
        let snake = Snake::new(&grid);
        let food = Food::new(&grid, rng);
        GameState { grid, snake, food, direction: Direction::Right, alive: true }
    }

    #[cfg(test)]
    fn from_parts(grid: Grid, snake: Snake, food: Food, direction: Direction) -> Self {
        GameState { grid, snake, food, direction, alive: true }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Food {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Turns towards `direction` unless that would reverse onto the neck.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, requested: Option<Direction>, rng: &mut R) -> TickResult {
        if !self.alive {
            return TickResult::Crashed;
        }

        if let Some(dir) = requested {
            if !self.steer(dir) {
                trace!(?dir, current = ?self.direction, "reversal ignored");
            }
        }

        self.snake.move_head(self.direction);

        let ate = match self.snake.eat(self.food) {
            Some(food) => {
                self.food = food;
                false
            }
            None => {
                self.food = Food::new(&self.grid, rng);
                debug!(length = self.snake.len(), food = ?self.food.position(), "food eaten");
                true
            }
        };

        self.alive = self.alive && self.snake.is_valid(&self.grid);

        match (self.alive, ate) {
            (false, _) => TickResult::Crashed,
            (true, true) => TickResult::Ate,
            (true, false) => TickResult::Moved,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub length: usize,
    pub ticks: u64,
    pub quit: bool,
}

/// Plays one game to the end and leaves the game-over screen up.
pub fn run<S, I, R>(surface: &mut S, input: &mut I, grid: Grid, rng: &mut R) -> Result<Summary>
where
    S: Surface + ?Sized,
    I: InputSource + ?Sized,
    R: Rng + ?Sized,
{
    let mut state = GameState::new(grid, rng);
    let mut ticks = 0;

    info!(?grid, food = ?state.food().position(), "game started");

    let quit = loop {
        let poll = input.poll()?;

        let result = state.tick(poll.direction, rng);
        ticks += 1;
        trace!(ticks, ?result, head = ?state.snake().head(), direction = ?state.direction(), "tick");

        draw_frame(surface, &state)?;
        surface.throttle(FPS);

        if poll.quit {
            break true;
        }
        if result == TickResult::Crashed {
            break false;
        }
    };

    let summary = Summary { length: state.snake().len(), ticks, quit };
    info!(
        length = summary.length,
        ticks = summary.ticks,
        quit = summary.quit,
        alive = state.is_alive(),
        "game over"
    );

    draw_game_over(surface)?;

    Ok(summary)
}
