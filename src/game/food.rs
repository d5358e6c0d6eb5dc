use log::debug;
use rand::Rng;

use super::error::GameError;
use super::grid::{Cell, Grid};
use super::snake::Snake;

/// Pick a uniformly random free cell for the next food.
///
/// Draws random grid-aligned cells until one is not covered by `snake`.
/// Fails with `GameError::GridFull` up front when the snake covers every cell,
/// so the retry loop always has a free cell to find.
pub fn place_food<R: Rng>(
    grid: &Grid,
    snake: &Snake,
    rng: &mut R,
) -> Result<Cell, GameError> {
    let capacity = grid.capacity();
    let occupied = occupied_cells(grid, snake);
    if occupied >= capacity {
        return Err(GameError::GridFull { occupied, capacity });
    }

    let side = grid.cells_per_side();
    let mut draws = 0u32;
    loop {
        draws += 1;
        let cell = grid.cell_at(rng.gen_range(0..side), rng.gen_range(0..side));
        if !snake.contains(cell) {
            debug!("food placed at ({}, {}) after {} draw(s)", cell.x, cell.y, draws);
            return Ok(cell);
        }
    }
}

/// Distinct on-board cells covered by the snake
fn occupied_cells(grid: &Grid, snake: &Snake) -> usize {
    let mut cells: Vec<Cell> = snake
        .cells()
        .copied()
        .filter(|&cell| grid.is_in_bounds(cell) && grid.is_aligned(cell))
        .collect();
    cells.sort_by_key(|cell| (cell.x, cell.y));
    cells.dedup();
    cells.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_food_is_aligned_and_in_bounds() {
        let grid = Grid::new(50, 500);
        let snake = Snake::new(Cell::new(150, 150));
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let food = place_food(&grid, &snake, &mut rng).unwrap();
            assert!(grid.is_in_bounds(food));
            assert!(grid.is_aligned(food));
            assert_ne!(food, snake.head());
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let grid = Grid::new(1, 3);
        // every cell except (2, 2)
        let cells = (0..3)
            .flat_map(|y| (0..3).map(move |x| Cell::new(x, y)))
            .filter(|&cell| cell != Cell::new(2, 2));
        let snake = Snake::from_cells(cells).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(place_food(&grid, &snake, &mut rng), Ok(Cell::new(2, 2)));
    }

    #[test]
    fn test_full_grid_is_an_error() {
        let grid = Grid::new(1, 2);
        let snake = Snake::from_cells([
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(1, 1),
            Cell::new(0, 1),
        ])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            place_food(&grid, &snake, &mut rng),
            Err(GameError::GridFull {
                occupied: 4,
                capacity: 4
            })
        );
    }

    #[test]
    fn test_duplicate_cells_do_not_count_twice() {
        let grid = Grid::new(1, 2);
        // transient duplicate after a growth tick
        let snake = Snake::from_cells([
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(1, 0),
            Cell::new(1, 1),
        ])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(place_food(&grid, &snake, &mut rng), Ok(Cell::new(0, 1)));
    }

    proptest! {
        #[test]
        fn prop_food_never_on_snake(
            seed in any::<u64>(),
            picks in proptest::collection::vec(0usize..100, 1..90),
        ) {
            let grid = Grid::new(50, 500);
            let mut cells: Vec<Cell> = picks
                .into_iter()
                .map(|i| grid.cell_at((i % 10) as i32, (i / 10) as i32))
                .collect();
            cells.dedup();
            let snake = Snake::from_cells(cells).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);

            let food = place_food(&grid, &snake, &mut rng).unwrap();
            prop_assert!(!snake.contains(food));
            prop_assert!(grid.is_in_bounds(food));
        }
    }
}
