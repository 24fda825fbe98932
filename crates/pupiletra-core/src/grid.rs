//! Letter grid and cell types.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
};

use crate::Position;

/// A single grid cell: a letter and whether it belongs to a found word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    letter: char,
    found: bool,
}

impl Cell {
    /// Creates an unfound cell holding `letter`.
    #[must_use]
    pub const fn new(letter: char) -> Self {
        Self {
            letter,
            found: false,
        }
    }

    /// Returns the letter shown in this cell.
    #[must_use]
    pub const fn letter(&self) -> char {
        self.letter
    }

    /// Returns `true` if this cell is part of at least one found word.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.found
    }

    /// Marks the cell as part of a found word.
    ///
    /// Returns `true` if the flag changed.
    pub fn mark_found(&mut self) -> bool {
        let changed = !self.found;
        self.found = true;
        changed
    }
}

/// A square, row-major grid of [`Cell`]s.
///
/// The shape never changes after construction; only the `found` flag of each
/// cell can be updated.
///
/// # Examples
///
/// ```
/// use pupiletra_core::{LetterGrid, Position};
///
/// let grid = LetterGrid::from_letters(2, "ABCD".chars()).unwrap();
/// assert_eq!(grid.size(), 2);
/// assert_eq!(grid[Position::new(1, 0)].letter(), 'C');
/// assert_eq!(
///     grid.read(&[Position::new(0, 0), Position::new(1, 1)]),
///     Some("AD".to_string())
/// );
/// assert_eq!(grid.to_string(), "A B\nC D\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    size: usize,
    cells: Vec<Cell>,
}

impl LetterGrid {
    /// Builds a grid from exactly `size * size` letters in row-major order.
    ///
    /// Returns `None` if the number of letters does not match.
    #[must_use]
    pub fn from_letters<I>(size: usize, letters: I) -> Option<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let cells: Vec<Cell> = letters.into_iter().map(Cell::new).collect();
        (cells.len() == size.checked_mul(size)?).then_some(Self { size, cells })
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `pos` is inside the grid.
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.is_within(self.size)
    }

    /// Returns the cell at `pos`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.contains(pos).then(|| &self[pos])
    }

    /// Returns an iterator over the rows of the grid.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> + '_ {
        // `chunks` panics on a zero chunk size.
        self.cells.chunks(self.size.max(1))
    }

    /// Returns an iterator over every position with its cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (Position::new(i / self.size, i % self.size), cell))
    }

    /// Concatenates the letters found at `positions`, in order.
    ///
    /// Returns `None` if any position is out of bounds.
    #[must_use]
    pub fn read(&self, positions: &[Position]) -> Option<String> {
        positions
            .iter()
            .map(|&pos| self.get(pos).map(Cell::letter))
            .collect()
    }

    fn offset(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position {pos} is outside a {0}x{0} grid",
            self.size
        );
        pos.row() * self.size + pos.col()
    }
}

impl Index<Position> for LetterGrid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[self.offset(pos)]
    }
}

impl IndexMut<Position> for LetterGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        let offset = self.offset(pos);
        &mut self.cells[offset]
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.letter)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> LetterGrid {
        LetterGrid::from_letters(3, "CATXOXXXW".chars()).expect("9 letters")
    }

    #[test]
    fn test_from_letters_checks_length() {
        assert!(LetterGrid::from_letters(3, "ABC".chars()).is_none());
        assert!(LetterGrid::from_letters(1, "A".chars()).is_some());
    }

    #[test]
    fn test_read_along_positions() {
        let grid = sample_grid();
        let row = [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)];
        assert_eq!(grid.read(&row).as_deref(), Some("CAT"));

        let diagonal = [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)];
        assert_eq!(grid.read(&diagonal).as_deref(), Some("COW"));

        assert_eq!(grid.read(&[Position::new(3, 0)]), None);
    }

    #[test]
    fn test_mark_found_is_monotonic() {
        let mut grid = sample_grid();
        let pos = Position::new(1, 1);
        assert!(!grid[pos].is_found());
        assert!(grid[pos].mark_found());
        assert!(!grid[pos].mark_found());
        assert!(grid[pos].is_found());
    }

    #[test]
    fn test_cells_iterates_row_major() {
        let grid = sample_grid();
        let positions: Vec<_> = grid.cells().map(|(pos, _)| pos).collect();
        assert_eq!(positions.len(), 9);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[5], Position::new(1, 2));
        assert_eq!(grid.rows().len(), 3);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = sample_grid();
        assert!(grid.get(Position::new(0, 3)).is_none());
        assert_eq!(grid.get(Position::new(2, 2)).map(Cell::letter), Some('W'));
    }

    #[test]
    #[should_panic(expected = "outside a 3x3 grid")]
    fn test_index_out_of_bounds_panics() {
        let grid = sample_grid();
        let _ = grid[Position::new(3, 3)];
    }
}
