use super::direction::Direction;
use super::grid::{Grid, Point};
use crate::consts;
use std::collections::VecDeque;

/// Snake state.
///
/// The body is ordered head-first and is never empty.  The committed
/// direction and the pending direction are tracked separately: turn requests
/// only touch the pending direction, and [`Snake::advance`] commits it, so a
/// turn can never take effect in the middle of a step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The positions of the snake's cells, head at the front
    pub(super) body: VecDeque<Point>,

    /// The direction of the last completed move
    pub(super) direction: Direction,

    /// The direction to commit on the next move
    pub(super) pending: Direction,

    /// When set, the next move keeps the tail, lengthening the snake by one
    pub(super) growing: bool,
}

impl Snake {
    /// Create a new snake with its head at `head`, facing east, with two
    /// trailing cells to the west.
    pub(super) fn new(head: Point) -> Snake {
        let mut body = VecDeque::with_capacity(consts::INITIAL_SNAKE_LENGTH);
        let mut cell = head;
        for _ in 0..consts::INITIAL_SNAKE_LENGTH {
            body.push_back(cell);
            cell = Direction::West.step(cell);
        }
        Snake {
            body,
            direction: Direction::East,
            pending: Direction::East,
            growing: false,
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Point {
        *self.body.front().expect("snake body should never be empty")
    }

    /// Return the positions of the snake's cells, head first
    pub(crate) fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    /// Return the glyph to use for drawing the snake's head
    pub(crate) fn head_symbol(&self) -> char {
        match self.direction {
            Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }

    /// Request that the snake turn to face `direction` on its next move.
    /// A request for the exact opposite of the last committed direction is
    /// dropped; committing it would reverse the snake into its own neck.
    pub(super) fn turn(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.pending = direction;
        }
    }

    /// The cell the head will occupy after the next move, under the
    /// direction that move will commit
    pub(super) fn next_head(&self) -> Point {
        self.pending.step(self.head())
    }

    /// Move the snake forwards one cell: commit the pending direction,
    /// prepend the new head, and drop the tail unless a growth is pending.
    /// This is the only place the body length changes.
    pub(super) fn advance(&mut self) {
        self.direction = self.pending;
        let head = self.direction.step(self.head());
        self.body.push_front(head);
        if self.growing {
            self.growing = false;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Mark the snake to keep its tail on the next move.  Calling this more
    /// than once between moves still grows the snake by only one cell.
    pub(super) fn grow(&mut self) {
        self.growing = true;
    }

    /// Whether the head has left the board or run into another body cell
    pub(super) fn collided(&self, grid: Grid) -> bool {
        let head = self.head();
        !grid.contains(head) || self.body.iter().skip(1).any(|&p| p == head)
    }

    /// Assemble a snake in an arbitrary configuration for tests
    #[cfg(test)]
    pub(crate) fn from_parts<I: IntoIterator<Item = Point>>(body: I, direction: Direction) -> Snake {
        Snake {
            body: body.into_iter().collect(),
            direction,
            pending: direction,
            growing: false,
        }
    }
}
