use super::grid::Point;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The cell one step from `pos` in this direction.  The board's y axis
    /// grows downward, so north decrements y.  No bounds are applied here;
    /// collision testing decides whether the result is on the board.
    pub(crate) fn step(self, pos: Point) -> Point {
        match self {
            Direction::North => Point::new(pos.x, pos.y - 1),
            Direction::East => Point::new(pos.x + 1, pos.y),
            Direction::South => Point::new(pos.x, pos.y + 1),
            Direction::West => Point::new(pos.x - 1, pos.y),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::North, Point::new(2, 7), Point::new(2, 6))]
    #[case(Direction::East, Point::new(2, 7), Point::new(3, 7))]
    #[case(Direction::South, Point::new(2, 7), Point::new(2, 8))]
    #[case(Direction::West, Point::new(2, 7), Point::new(1, 7))]
    #[case(Direction::North, Point::new(2, 0), Point::new(2, -1))]
    #[case(Direction::West, Point::new(0, 7), Point::new(-1, 7))]
    fn test_step(#[case] d: Direction, #[case] pos: Point, #[case] stepped: Point) {
        assert_eq!(d.step(pos), stepped);
    }

    #[rstest]
    #[case(Direction::North, Direction::South)]
    #[case(Direction::East, Direction::West)]
    #[case(Direction::South, Direction::North)]
    #[case(Direction::West, Direction::East)]
    fn test_reverse(#[case] d: Direction, #[case] r: Direction) {
        assert_eq!(d.reverse(), r);
        assert_eq!(r.reverse(), d);
    }
}
