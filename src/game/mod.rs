mod direction;
mod food;
mod grid;
mod score;
mod snake;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Grid, Point};
pub(crate) use self::snake::Snake;
use self::food::Food;
use self::score::Score;
use crate::consts;
use rand::Rng;
use std::time::{Duration, Instant};

/// One round of snake: the rules engine, free of any input or rendering
/// concerns.
///
/// The round is advanced by calling [`Round::tick`] as often as the driving
/// loop likes; the simulation itself only steps once per `interval`.
/// Presentation layers read the round through its accessors and feed it
/// intents through [`Round::direction_intent`] and [`Round::restart_intent`];
/// they never mutate it any other way.
#[derive(Clone, Debug)]
pub(crate) struct Round<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    snake: Snake,
    food: Food,
    score: Score,
    state: RoundState,
    interval: Duration,
    last_step: Option<Instant>,
}

impl Round {
    pub(crate) fn new(grid: Grid, interval: Duration) -> Round {
        Round::new_with_rng(grid, interval, rand::rng())
    }
}

impl<R: Rng> Round<R> {
    pub(crate) fn new_with_rng(grid: Grid, interval: Duration, mut rng: R) -> Round<R> {
        let snake = Snake::new(grid.center());
        let food = Food::place(grid, &snake, &mut rng);
        Round {
            rng,
            grid,
            snake,
            food,
            score: Score::new(),
            state: RoundState::Running,
            interval,
            last_step: None,
        }
    }

    /// Offer the round a chance to advance.  `now` is supplied by the
    /// driving loop, which may call this at any frequency; a simulation step
    /// runs only when `interval` has elapsed since the last one.  The clock
    /// resets to `now` rather than accumulating, so a long stall produces a
    /// single step instead of a burst of catch-up steps.  The first call
    /// after construction only arms the clock.
    ///
    /// Returns whether a simulation step ran.
    pub(crate) fn tick(&mut self, now: Instant) -> bool {
        let Some(last) = self.last_step else {
            self.last_step = Some(now);
            return false;
        };
        if now.saturating_duration_since(last) >= self.interval {
            self.step();
            self.last_step = Some(now);
            true
        } else {
            false
        }
    }

    /// One simulation step: commit the buffered direction and move, then
    /// test for collision, then handle food.  A step that ends the round
    /// does not score, even if the fatal cell held food.
    fn step(&mut self) {
        if self.state != RoundState::Running {
            return;
        }
        // Decide growth before the move so that a food hit lengthens the
        // snake on this step, and only if the target cell is genuinely food
        // and not part of the body.
        let target = self.snake.next_head();
        let ate = target == self.food.position() && !self.snake.body().contains(&target);
        if ate {
            self.snake.grow();
        }
        self.snake.advance();
        if self.snake.collided(self.grid) {
            self.state = RoundState::GameOver;
            return;
        }
        if ate {
            self.food.respawn(self.grid, &self.snake, &mut self.rng);
            self.score.add(consts::FOOD_POINTS);
        }
    }

    /// Ask the snake to turn.  Ignored once the round is over; the snake on
    /// the board is then a relic and must not change.
    pub(crate) fn direction_intent(&mut self, direction: Direction) {
        if self.state == RoundState::Running {
            self.snake.turn(direction);
        }
    }

    /// Start the round over with a fresh snake, food, and score.  Ignored
    /// unless the round is actually over.
    pub(crate) fn restart_intent(&mut self) {
        if self.state != RoundState::GameOver {
            return;
        }
        self.snake = Snake::new(self.grid.center());
        self.food = Food::place(self.grid, &self.snake, &mut self.rng);
        self.score.reset();
        self.state = RoundState::Running;
    }
}

impl<R> Round<R> {
    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn food_position(&self) -> Point {
        self.food.position()
    }

    pub(crate) fn score(&self) -> u32 {
        self.score.value()
    }

    pub(crate) fn state(&self) -> RoundState {
        self.state
    }

    /// Assemble a round in an arbitrary configuration for tests
    #[cfg(test)]
    pub(crate) fn fixture(
        grid: Grid,
        snake: Snake,
        food: Point,
        state: RoundState,
        score: u32,
        rng: R,
    ) -> Round<R> {
        Round {
            rng,
            grid,
            snake,
            food: Food::at(food),
            score: Score(score),
            state,
            interval: consts::DEFAULT_UPDATE_INTERVAL,
            last_step: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum RoundState {
    Running,
    GameOver,
}
