/// A cell coordinate on the grid, 0-indexed from the top-left.
pub type Cell = (i32, i32);

/// Direction of movement on the cell grid, one cell at a time.
/// Y grows downward (screen space), so `Up` decrements `cellY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order wander logic samples them.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Cell offset for one step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The cell one step away from `cell` in this direction.
    pub fn step(self, cell: Cell) -> Cell {
        let (dx, dy) = self.offset();
        (cell.0 + dx, cell.1 + dy)
    }

    /// Decode from the numeric protocol value used by the host page.
    /// Returns None if the value is out of range.
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Fixed-size rectangular cell space. Bounds checks only; occupancy
/// lives with the game's object collection.
#[derive(Debug, Clone)]
pub struct Grid {
    cells_x: i32,
    cells_y: i32,
}

impl Grid {
    pub fn new(cells_x: u32, cells_y: u32) -> Self {
        Self {
            cells_x: cells_x as i32,
            cells_y: cells_y as i32,
        }
    }

    pub fn cells_x(&self) -> i32 {
        self.cells_x
    }

    pub fn cells_y(&self) -> i32 {
        self.cells_y
    }

    /// Whether (cellX, cellY) lies inside the grid. Out-of-bounds is a
    /// plain `false`, never an error.
    pub fn is_valid_cell(&self, cell_x: i32, cell_y: i32) -> bool {
        cell_x >= 0 && cell_x < self.cells_x && cell_y >= 0 && cell_y < self.cells_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_zero_indexed_exclusive() {
        let grid = Grid::new(8, 8);
        assert!(grid.is_valid_cell(0, 0));
        assert!(grid.is_valid_cell(7, 7));
        assert!(!grid.is_valid_cell(8, 0));
        assert!(!grid.is_valid_cell(0, 8));
        assert!(!grid.is_valid_cell(-1, 0));
        assert!(!grid.is_valid_cell(0, -1));
    }

    #[test]
    fn direction_steps_one_cell() {
        assert_eq!(Direction::Up.step((3, 3)), (3, 2));
        assert_eq!(Direction::Down.step((3, 3)), (3, 4));
        assert_eq!(Direction::Left.step((3, 3)), (2, 3));
        assert_eq!(Direction::Right.step((3, 3)), (4, 3));
    }

    #[test]
    fn direction_round_trips_protocol_values() {
        for v in 0..4 {
            assert!(Direction::from_u32(v).is_some());
        }
        assert!(Direction::from_u32(4).is_none());
    }
}
