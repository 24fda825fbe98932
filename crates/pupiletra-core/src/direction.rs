//! The eight straight-line directions a word can run in.

use std::fmt::{self, Display};

use crate::Position;

/// A unit step between neighbouring cells.
///
/// Directions are used both to lay words onto the grid and to lock the
/// orientation of an in-progress selection.
///
/// # Examples
///
/// ```
/// use pupiletra_core::{Direction, Position};
///
/// assert_eq!(Direction::SouthWest.delta(), (1, -1));
/// assert_eq!(Direction::from_delta(-1, 0), Some(Direction::North));
/// assert_eq!(Direction::from_delta(0, 0), None);
///
/// // The direction from one cell towards another
/// let from = Position::new(4, 4);
/// assert_eq!(Direction::between(from, Position::new(0, 0)), Some(Direction::NorthWest));
/// assert_eq!(Direction::between(from, Position::new(4, 9)), Some(Direction::East));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up (row decreases).
    North,
    /// Up and right.
    NorthEast,
    /// Right (column increases).
    East,
    /// Down and right.
    SouthEast,
    /// Down (row increases).
    South,
    /// Down and left.
    SouthWest,
    /// Left (column decreases).
    West,
    /// Up and left.
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from [`Direction::North`].
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Returns the `(row, column)` step of this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::NorthEast => (-1, 1),
            Self::East => (0, 1),
            Self::SouthEast => (1, 1),
            Self::South => (1, 0),
            Self::SouthWest => (1, -1),
            Self::West => (0, -1),
            Self::NorthWest => (-1, -1),
        }
    }

    /// Converts a `(row, column)` step back into a direction.
    ///
    /// Returns `None` for `(0, 0)` and for steps longer than one cell.
    #[must_use]
    pub const fn from_delta(dr: isize, dc: isize) -> Option<Self> {
        match (dr, dc) {
            (-1, 0) => Some(Self::North),
            (-1, 1) => Some(Self::NorthEast),
            (0, 1) => Some(Self::East),
            (1, 1) => Some(Self::SouthEast),
            (1, 0) => Some(Self::South),
            (1, -1) => Some(Self::SouthWest),
            (0, -1) => Some(Self::West),
            (-1, -1) => Some(Self::NorthWest),
            _ => None,
        }
    }

    /// Returns the sign-wise direction pointing from `from` towards `to`.
    ///
    /// The result is the per-axis sign of the difference, so it is defined for
    /// any pair of distinct positions, aligned or not. Returns `None` when the
    /// positions are equal.
    #[must_use]
    pub fn between(from: Position, to: Position) -> Option<Self> {
        let dr = signum(from.row(), to.row());
        let dc = signum(from.col(), to.col());
        Self::from_delta(dr, dc)
    }
}

fn signum(from: usize, to: usize) -> isize {
    match to.cmp(&from) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        };
        f.write_str(name)
    }
}
