//! Grid position representation.

use std::fmt::{self, Display};

use crate::Direction;

/// A cell coordinate on a square letter grid.
///
/// Rows grow downwards and columns grow to the right; `(0, 0)` is the top-left
/// corner.
///
/// # Examples
///
/// ```
/// use pupiletra_core::{Direction, Position};
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 3);
///
/// // Step one cell to the south-east inside a 5×5 grid
/// assert_eq!(pos.step(Direction::SouthEast, 1, 5), Some(Position::new(3, 4)));
/// // ...but two steps leave the grid
/// assert_eq!(pos.step(Direction::SouthEast, 2, 5), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and a column index.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns `true` if this position lies inside a `size`×`size` grid.
    #[must_use]
    pub const fn is_within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Moves `count` cells along `direction`.
    ///
    /// Returns `None` if the destination is outside a `size`×`size` grid.
    #[must_use]
    pub fn step(self, direction: Direction, count: usize, size: usize) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let count = isize::try_from(count).ok()?;
        let row = self.row.checked_add_signed(dr.checked_mul(count)?)?;
        let col = self.col.checked_add_signed(dc.checked_mul(count)?)?;
        let next = Self::new(row, col);
        next.is_within(size).then_some(next)
    }

    /// Returns the position one cell further along `direction`, ignoring grid bounds.
    ///
    /// Returns `None` only when the row or column would become negative.
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        Some(Self::new(
            self.row.checked_add_signed(dr)?,
            self.col.checked_add_signed(dc)?,
        ))
    }

    /// Returns the Chebyshev (king-move) distance between two positions.
    ///
    /// Adjacent cells, including diagonal ones, are at distance 1.
    #[must_use]
    pub const fn chebyshev_distance(self, other: Self) -> usize {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        if dr > dc { dr } else { dc }
    }

    /// Returns `true` if `other` is one of the 8 cells surrounding this one.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.chebyshev_distance(other) == 1
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
