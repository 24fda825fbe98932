//! Puzzle state: a letter grid together with its word placements.

use crate::{LetterGrid, Placement, Position};

/// A violated puzzle invariant, reported by [`Puzzle::validate`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// A placement without any cell.
    #[display("placement of {word:?} has no cells")]
    EmptyPlacement {
        /// The placed word.
        word: String,
    },
    /// The number of cells differs from the number of letters.
    #[display("placement of {word:?} has {cells} cells for {letters} letters")]
    LengthMismatch {
        /// The placed word.
        word: String,
        /// Number of recorded cells.
        cells: usize,
        /// Number of characters in the word.
        letters: usize,
    },
    /// A recorded cell lies outside the grid.
    #[display("placement of {word:?} leaves the grid at {position}")]
    OutOfBounds {
        /// The placed word.
        word: String,
        /// The offending cell.
        position: Position,
    },
    /// The grid letter differs from the word's letter.
    #[display("placement of {word:?} expects {expected:?} at {position}, found {actual:?}")]
    LetterMismatch {
        /// The placed word.
        word: String,
        /// The offending cell.
        position: Position,
        /// Letter required by the word.
        expected: char,
        /// Letter present in the grid.
        actual: char,
    },
    /// Consecutive cells do not follow one fixed direction.
    #[display("placement of {word:?} is not a straight line")]
    NotStraight {
        /// The placed word.
        word: String,
    },
    /// A found placement whose cells are not all marked found.
    #[display("placement of {word:?} is found but {position} is not marked")]
    UnmarkedCell {
        /// The placed word.
        word: String,
        /// The unmarked cell.
        position: Position,
    },
}

/// A generated word-search puzzle.
///
/// The puzzle owns its grid and the ordered list of placements. After
/// generation only the `found` flags change, and only from `false` to `true`.
///
/// # Examples
///
/// ```
/// use pupiletra_core::{LetterGrid, Placement, Position, Puzzle};
///
/// let grid = LetterGrid::from_letters(2, "ONXX".chars()).unwrap();
/// let placement = Placement::new(
///     "ON".to_owned(),
///     vec![Position::new(0, 0), Position::new(0, 1)],
/// );
/// let mut puzzle = Puzzle::new(grid, vec![placement]);
/// assert!(puzzle.validate().is_ok());
///
/// // Selecting the word backwards still matches
/// let index = puzzle.find_unfound_match("NO").unwrap();
/// assert!(puzzle.mark_found(index));
/// assert!(puzzle.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: LetterGrid,
    placements: Vec<Placement>,
}

impl Puzzle {
    /// Creates a puzzle from a filled grid and its placements.
    #[must_use]
    pub fn new(grid: LetterGrid, placements: Vec<Placement>) -> Self {
        Self { grid, placements }
    }

    /// Returns the letter grid.
    #[must_use]
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Returns the placed words in placement order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Returns the number of placements already found.
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.placements.iter().filter(|p| p.is_found()).count()
    }

    /// Returns `true` if there is at least one placement and every placement is found.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.placements.is_empty() && self.placements.iter().all(Placement::is_found)
    }

    /// Returns the index of the first unfound placement spelled by `letters`
    /// in either reading direction.
    #[must_use]
    pub fn find_unfound_match(&self, letters: &str) -> Option<usize> {
        self.placements
            .iter()
            .position(|p| !p.is_found() && p.matches(letters))
    }

    /// Marks the placement at `index` and all of its cells as found.
    ///
    /// Returns `true` if the placement was not found before.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn mark_found(&mut self, index: usize) -> bool {
        let placement = &mut self.placements[index];
        let changed = placement.mark_found();
        for &pos in placement.positions() {
            self.grid[pos].mark_found();
        }
        changed
    }

    /// Marks every placement and every placed cell as found.
    ///
    /// Returns the number of placements that changed state.
    pub fn reveal_all(&mut self) -> usize {
        (0..self.placements.len())
            .filter(|&index| self.mark_found(index))
            .count()
    }

    /// Checks all structural invariants of the puzzle.
    ///
    /// # Errors
    ///
    /// Returns the first [`PuzzleError`] encountered, checking placements in order.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        for placement in &self.placements {
            self.validate_placement(placement)?;
        }
        Ok(())
    }

    fn validate_placement(&self, placement: &Placement) -> Result<(), PuzzleError> {
        let word = || placement.word().to_owned();
        let positions = placement.positions();
        let letters = placement.word().chars().count();

        if positions.is_empty() {
            return Err(PuzzleError::EmptyPlacement { word: word() });
        }
        if positions.len() != letters {
            return Err(PuzzleError::LengthMismatch {
                word: word(),
                cells: positions.len(),
                letters,
            });
        }

        for (&position, expected) in positions.iter().zip(placement.word().chars()) {
            let Some(cell) = self.grid.get(position) else {
                return Err(PuzzleError::OutOfBounds {
                    word: word(),
                    position,
                });
            };
            if cell.letter() != expected {
                return Err(PuzzleError::LetterMismatch {
                    word: word(),
                    position,
                    expected,
                    actual: cell.letter(),
                });
            }
            if placement.is_found() && !cell.is_found() {
                return Err(PuzzleError::UnmarkedCell {
                    word: word(),
                    position,
                });
            }
        }

        if let Some(direction) = placement.direction() {
            let straight = positions
                .windows(2)
                .all(|pair| pair[0].neighbor(direction) == Some(pair[1]));
            if !straight {
                return Err(PuzzleError::NotStraight { word: word() });
            }
        } else if positions.len() > 1 {
            return Err(PuzzleError::NotStraight { word: word() });
        }

        Ok(())
    }
}
