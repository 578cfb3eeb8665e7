use crate::snake::Direction;

/// A cell coordinate. May lie outside the grid after a fatal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn moved(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Position { x: self.x + dx, y: self.y + dy }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Grid { width, height }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the snake's head may stand on `pos`. The last column and row
    /// are a border: a head there is out of bounds.
    pub fn in_bounds(&self, pos: Position) -> bool {
        (0..self.width - 1).contains(&pos.x) && (0..self.height - 1).contains(&pos.y)
    }

    /// Whether `pos` lies on the drawable area, border included.
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moved() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved(Direction::Up), Position::new(5, 4));
        assert_eq!(pos.moved(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved(Direction::Left), Position::new(4, 5));
        assert_eq!(pos.moved(Direction::Right), Position::new(6, 5));
    }

    #[test]
    fn test_in_bounds_excludes_last_row_and_column() {
        let grid = Grid::new(40, 30);

        assert!(grid.in_bounds(Position::new(0, 0)));
        assert!(grid.in_bounds(Position::new(38, 28)));

        assert!(!grid.in_bounds(Position::new(-1, 10)));
        assert!(!grid.in_bounds(Position::new(10, -1)));
        assert!(!grid.in_bounds(Position::new(39, 10)));
        assert!(!grid.in_bounds(Position::new(10, 29)));
        assert!(!grid.in_bounds(Position::new(40, 10)));
    }

    #[test]
    fn test_contains_includes_border() {
        let grid = Grid::new(40, 30);

        assert!(grid.contains(Position::new(39, 29)));
        assert!(!grid.contains(Position::new(40, 0)));
        assert!(!grid.contains(Position::new(-1, 0)));
        assert!(!grid.contains(Position::new(0, 30)));
    }
}
