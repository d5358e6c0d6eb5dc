use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// One grid-aligned square on the board, in pixel-like units
///
/// Both coordinates are multiples of the grid's cell size while the cell is
/// on the board. Translated cells may leave the board, hence signed integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `step` units in `direction`. `Direction::None` is a no-op.
    pub fn moved_in_direction(&self, direction: Direction, step: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * step,
            y: self.y + dy * step,
        }
    }
}

/// Fixed square board of `extent` units per side, split into cells of `cell_size`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cell_size: i32,
    extent: i32,
}

impl Grid {
    /// Callers are expected to have validated the pair (see `GameConfig::validate`).
    pub fn new(cell_size: i32, extent: i32) -> Self {
        Self { cell_size, extent }
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn extent(&self) -> i32 {
        self.extent
    }

    /// Number of cells along one side
    pub fn cells_per_side(&self) -> i32 {
        self.extent / self.cell_size
    }

    /// Total number of cells on the board
    pub fn capacity(&self) -> usize {
        let side = self.cells_per_side().max(0) as usize;
        side * side
    }

    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.extent && cell.y >= 0 && cell.y < self.extent
    }

    /// True if both coordinates sit on a cell boundary
    pub fn is_aligned(&self, cell: Cell) -> bool {
        cell.x % self.cell_size == 0 && cell.y % self.cell_size == 0
    }

    /// Cell at column `col`, row `row` (both counted in cells, not units)
    pub fn cell_at(&self, col: i32, row: i32) -> Cell {
        Cell::new(col * self.cell_size, row * self.cell_size)
    }
}
