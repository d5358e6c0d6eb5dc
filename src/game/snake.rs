use std::collections::VecDeque;

use super::direction::Direction;
use super::grid::Cell;

/// The snake: an ordered run of cells, oldest first, with the head at the back
///
/// Movement pushes a new head onto the back and pops the tail off the front.
/// Growth pushes without popping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// A one-cell snake whose head is `head`
    pub fn new(head: Cell) -> Self {
        Self {
            body: VecDeque::from([head]),
        }
    }

    /// Build a snake from cells ordered tail first, head last.
    /// Returns `None` for an empty sequence.
    pub fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            None
        } else {
            Some(Self { body })
        }
    }

    pub fn head(&self) -> Cell {
        // length >= 1 is upheld by every constructor and mutator
        self.body[self.body.len() - 1]
    }

    pub fn tail(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Cells from tail to head
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Where the head would be after one step of `step` units in `direction`.
    /// `Direction::None` yields the current head.
    pub fn compute_next_head(&self, direction: Direction, step: i32) -> Cell {
        self.head().moved_in_direction(direction, step)
    }

    /// Move without growing: append the new head, drop the oldest cell
    pub fn advance(&mut self, next_head: Cell) {
        self.body.push_back(next_head);
        self.body.pop_front();
    }

    /// Move and grow by one: append the new head, keep the tail
    pub fn grow(&mut self, next_head: Cell) {
        self.body.push_back(next_head);
    }

    /// True if the head sits on any cell older than the neck.
    ///
    /// Only indices below `len - 2` are compared, so the head and the cell
    /// just behind it are never considered. A snake of two cells or fewer
    /// cannot collide with itself.
    pub fn has_self_collision(&self) -> bool {
        if self.body.len() <= 2 {
            return false;
        }
        let head = self.head();
        let not_head = self.body.len() - 2;
        self.body.iter().take(not_head).any(|&cell| cell == head)
    }
}
