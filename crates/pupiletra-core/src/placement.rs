//! Recorded locations of target words.

use crate::{Direction, Position, reverse_word};

/// Where a target word was laid on the grid.
///
/// `positions[i]` holds the `i`-th character of `word`. The positions form a
/// straight run along a single [`Direction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    word: String,
    positions: Vec<Position>,
    found: bool,
}

impl Placement {
    /// Creates an unfound placement.
    #[must_use]
    pub fn new(word: String, positions: Vec<Position>) -> Self {
        Self {
            word,
            positions,
            found: false,
        }
    }

    /// Returns the normalized target word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns the cells of the word, one per character, in word order.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Returns `true` once the word has been found or revealed.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.found
    }

    /// Marks the placement as found.
    ///
    /// Returns `true` if the flag changed.
    pub fn mark_found(&mut self) -> bool {
        let changed = !self.found;
        self.found = true;
        changed
    }

    /// Returns the reading direction from the first to the last letter.
    ///
    /// Returns `None` for placements shorter than two cells.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        match self.positions.as_slice() {
            [first, second, ..] => Direction::between(*first, *second),
            _ => None,
        }
    }

    /// Returns `true` if `letters` spell this word forwards or backwards.
    #[must_use]
    pub fn matches(&self, letters: &str) -> bool {
        self.word == letters || self.word == reverse_word(letters)
    }

    /// Returns `true` if the placement covers `pos`.
    #[must_use]
    pub fn covers(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}
