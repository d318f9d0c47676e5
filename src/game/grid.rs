use std::fmt;

/// A cell coordinate on (or just off) the board.
///
/// Coordinates are signed so that a move can carry the head one cell past an
/// edge; whether a point is actually on the board is decided by
/// [`Grid::contains`], not by the type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: i16,
    pub(crate) y: i16,
}

impl Point {
    pub(crate) const fn new(x: i16, y: i16) -> Point {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A square board of `size` × `size` cells, origin in the top-left corner,
/// y increasing downward.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    size: i16,
}

impl Grid {
    /// The smallest supported board edge.  Anything smaller cannot be
    /// guaranteed to have a free cell for food next to a three-segment
    /// starting snake.
    pub(crate) const MIN_SIZE: u16 = 4;

    /// Create a grid with the given edge length.  Returns `None` if `size`
    /// is below [`Grid::MIN_SIZE`] or too large to address with cell
    /// coordinates.
    pub(crate) fn new(size: u16) -> Option<Grid> {
        if size < Grid::MIN_SIZE {
            return None;
        }
        i16::try_from(size).ok().map(|size| Grid { size })
    }

    /// The number of cells along each edge
    pub(crate) fn size(self) -> i16 {
        self.size
    }

    /// The edge length as a screen dimension
    pub(crate) fn width(self) -> u16 {
        self.size.unsigned_abs()
    }

    /// Whether `p` lies on the board
    pub(crate) fn contains(self, p: Point) -> bool {
        (0..self.size).contains(&p.x) && (0..self.size).contains(&p.y)
    }

    /// The cell at which a new snake's head is seeded
    pub(crate) fn center(self) -> Point {
        Point::new(self.size / 2, self.size / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, None)]
    #[case(3, None)]
    #[case(4, Some(4))]
    #[case(20, Some(20))]
    #[case(40_000, None)]
    fn test_new(#[case] size: u16, #[case] edge: Option<i16>) {
        assert_eq!(Grid::new(size).map(Grid::size), edge);
    }

    #[rstest]
    #[case(Point::new(0, 0), true)]
    #[case(Point::new(7, 7), true)]
    #[case(Point::new(3, 5), true)]
    #[case(Point::new(-1, 3), false)]
    #[case(Point::new(3, -1), false)]
    #[case(Point::new(8, 3), false)]
    #[case(Point::new(3, 8), false)]
    fn test_contains(#[case] p: Point, #[case] inside: bool) {
        let grid = Grid::new(8).expect("8 should be a valid grid size");
        assert_eq!(grid.contains(p), inside);
    }

    #[test]
    fn test_center() {
        let grid = Grid::new(20).expect("20 should be a valid grid size");
        assert_eq!(grid.center(), Point::new(10, 10));
    }
}
