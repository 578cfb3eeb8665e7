use std::collections::VecDeque;

use crate::food::Food;
use crate::grid::{Grid, Position};
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Up, Down) | (Down, Up) | (Right, Left) | (Left, Right)
        )
    }

    pub fn delta(&self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

/// Body segments, head at the front.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    pub fn new(grid: &Grid) -> Self {
        let y = grid.height() / 2;
        let body = VecDeque::from(vec![Position::new(1, y), Position::new(0, y)]);
        Snake { body }
    }

    #[cfg(test)]
    pub fn from_segments(segments: &[Position]) -> Self {
        assert!(segments.len() >= 2, "a snake has at least two segments");
        Snake { body: segments.iter().copied().collect() }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn segments(&self) -> impl Iterator<Item = &Position> + '_ {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Pushes a new head one cell towards `direction`. The tail stays put
    /// until `eat` decides whether this move was a growth.
    pub fn move_head(&mut self, direction: Direction) {
        let new_head = self.head().moved(direction);
        self.body.push_front(new_head);
    }

    /// Consumes `food` if the head is on it. Otherwise drops the tail and
    /// hands the food back.
    pub fn eat(&mut self, food: Food) -> Option<Food> {
        if self.head() == food.position() {
            None
        } else {
            self.body.pop_back();
            Some(food)
        }
    }

    pub fn is_valid(&self, grid: &Grid) -> bool {
        let head = self.head();
        grid.in_bounds(head) && !self.body.iter().skip(1).any(|&seg| seg == head)
    }
}
