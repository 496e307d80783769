//! Board coordinates.

use std::fmt::{self, Display};

/// A board coordinate.
///
/// `x` is the column (0 is the leftmost) and `y` is the row (0 is the top).
/// Gravity pulls toward larger `y`.
///
/// # Examples
///
/// ```
/// use puyochain_core::{Direction, Position};
///
/// let pos = Position::new(2, 5);
/// assert_eq!(pos.step(Direction::Up), Some(Position::new(2, 4)));
/// assert_eq!(Position::new(0, 0).step(Direction::Left), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    /// Creates a position from a column and a row.
    #[must_use]
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the column.
    #[must_use]
    #[inline]
    pub const fn x(self) -> usize {
        self.x
    }

    /// Returns the row.
    #[must_use]
    #[inline]
    pub const fn y(self) -> usize {
        self.y
    }

    /// Returns the neighbouring position in `dir`.
    ///
    /// Returns `None` when the step would leave the top or left edge. Bottom and
    /// right edges depend on the grid and are checked by
    /// [`Grid::contains`](crate::Grid::contains).
    #[must_use]
    #[inline]
    pub const fn step(self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Up => match self.y.checked_sub(1) {
                Some(y) => Some(Self::new(self.x, y)),
                None => None,
            },
            Direction::Down => Some(Self::new(self.x, self.y + 1)),
            Direction::Left => match self.x.checked_sub(1) {
                Some(x) => Some(Self::new(x, self.y)),
                None => None,
            },
            Direction::Right => Some(Self::new(self.x + 1, self.y)),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four orthogonal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the floor.
    Down,
    /// Toward column 0.
    Left,
    /// Away from column 0.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];
}
