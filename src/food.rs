use rand::Rng;

use crate::grid::{Grid, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    /// Drops food anywhere in `[1, width) x [1, height)`. The snake is not
    /// consulted, so food can land on its body.
    pub fn new<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        let x = rng.gen_range(1..grid.width());
        let y = rng.gen_range(1..grid.height());
        Food { position: Position::new(x, y) }
    }

    #[cfg(test)]
    pub fn at(position: Position) -> Self {
        Food { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }
}
