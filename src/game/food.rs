use super::grid::{Grid, Point};
use super::snake::Snake;
use rand::Rng;

/// The single piece of food on the board.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Food {
    position: Point,
}

impl Food {
    /// Place food on a cell not occupied by the snake, drawing x and y
    /// independently and uniformly until a free cell comes up.
    ///
    /// This terminates whenever the board has at least one free cell; a
    /// snake that fills the entire board would make it spin forever, which
    /// is accepted as out of scope rather than guarded against.
    pub(super) fn place<R: Rng>(grid: Grid, snake: &Snake, rng: &mut R) -> Food {
        loop {
            let position = Point::new(
                rng.random_range(0..grid.size()),
                rng.random_range(0..grid.size()),
            );
            if !snake.body().contains(&position) {
                return Food { position };
            }
        }
    }

    /// Replace the food after it has been eaten, re-running the placement
    /// rule against the snake as it stands after the move that ate it.
    pub(super) fn respawn<R: Rng>(&mut self, grid: Grid, snake: &Snake, rng: &mut R) {
        *self = Food::place(grid, snake, rng);
    }

    /// Return the position of the food
    pub(crate) fn position(&self) -> Point {
        self.position
    }

    /// Place food on an explicit cell for tests
    #[cfg(test)]
    pub(crate) fn at(position: Point) -> Food {
        Food { position }
    }
}
