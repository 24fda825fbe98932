use pupiletra_core::{Direction, LetterGrid, Position};
use rand::prelude::*;

use crate::FILLER_ALPHABET;

/// A partially filled grid used while laying out words.
#[derive(Debug, Clone)]
pub(crate) struct DraftGrid {
    size: usize,
    letters: Vec<Option<char>>,
}

impl DraftGrid {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            letters: vec![None; size * size],
        }
    }

    fn letter(&self, pos: Position) -> Option<char> {
        self.letters[pos.row() * self.size + pos.col()]
    }

    fn set_letter(&mut self, pos: Position, letter: char) {
        self.letters[pos.row() * self.size + pos.col()] = Some(letter);
    }

    /// Returns the cells `word` would occupy from `anchor` along `direction`,
    /// or `None` if the run leaves the grid or disagrees with a filled cell.
    pub(crate) fn fit(
        &self,
        word: &[char],
        anchor: Position,
        direction: Direction,
    ) -> Option<Vec<Position>> {
        let last = word.len().checked_sub(1)?;
        anchor.step(direction, last, self.size)?;

        let mut positions = Vec::with_capacity(word.len());
        for (i, &letter) in word.iter().enumerate() {
            let pos = anchor.step(direction, i, self.size)?;
            if self.letter(pos).is_some_and(|current| current != letter) {
                return None;
            }
            positions.push(pos);
        }
        Some(positions)
    }

    /// Writes `word` onto `positions`. Cells that already hold the same letter
    /// are left as they are.
    pub(crate) fn commit(&mut self, word: &[char], positions: &[Position]) {
        debug_assert_eq!(word.len(), positions.len());
        for (&pos, &letter) in positions.iter().zip(word) {
            self.set_letter(pos, letter);
        }
    }

    /// Makes up to `attempts` random tries at placing `word`.
    ///
    /// Each try picks a uniformly random direction and anchor cell.
    pub(crate) fn try_place<R>(
        &mut self,
        word: &[char],
        attempts: usize,
        rng: &mut R,
    ) -> Option<Vec<Position>>
    where
        R: Rng + ?Sized,
    {
        for attempt in 0..attempts {
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            let anchor = Position::new(
                rng.random_range(0..self.size),
                rng.random_range(0..self.size),
            );
            if let Some(positions) = self.fit(word, anchor, direction) {
                log::trace!(
                    "placed {} letters at {anchor} heading {direction} after {} attempts",
                    word.len(),
                    attempt + 1
                );
                self.commit(word, &positions);
                return Some(positions);
            }
        }
        None
    }

    /// Fills every empty cell with a uniformly random filler letter.
    pub(crate) fn fill<R>(self, rng: &mut R) -> LetterGrid
    where
        R: Rng + ?Sized,
    {
        let size = self.size;
        let letters = self.letters.into_iter().map(|letter| {
            letter.unwrap_or_else(|| {
                char::from(FILLER_ALPHABET[rng.random_range(0..FILLER_ALPHABET.len())])
            })
        });
        let letters: Vec<char> = letters.collect();
        LetterGrid::from_letters(size, letters).expect("draft grid holds size * size cells")
    }

    #[cfg(test)]
    pub(crate) fn filled_count(&self) -> usize {
        self.letters.iter().filter(|letter| letter.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn chars(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    #[test]
    fn test_fit_rejects_out_of_bounds() {
        let draft = DraftGrid::new(4);
        let word = chars("GATO");
        assert!(draft.fit(&word, Position::new(0, 0), Direction::East).is_some());
        assert!(draft.fit(&word, Position::new(0, 1), Direction::East).is_none());
        assert!(draft.fit(&word, Position::new(3, 3), Direction::NorthWest).is_some());
        assert!(draft.fit(&word, Position::new(2, 3), Direction::North).is_none());
    }

    #[test]
    fn test_fit_allows_agreeing_overlap() {
        let mut draft = DraftGrid::new(4);
        let gato = chars("GATO");
        let positions = draft
            .fit(&gato, Position::new(0, 0), Direction::East)
            .expect("fits in empty grid");
        draft.commit(&gato, &positions);

        // TOMA shares the T at (0, 2)
        let toma = chars("TOMA");
        assert!(draft.fit(&toma, Position::new(0, 2), Direction::South).is_some());
        // COCO would overwrite the G at (0, 0)
        let coco = chars("COCO");
        assert!(draft.fit(&coco, Position::new(0, 0), Direction::South).is_none());
    }

    #[test]
    fn test_commit_is_idempotent_on_matching_cells() {
        let mut draft = DraftGrid::new(3);
        let word = chars("ANA");
        let positions = draft
            .fit(&word, Position::new(1, 0), Direction::East)
            .expect("fits");
        draft.commit(&word, &positions);
        draft.commit(&word, &positions);
        assert_eq!(draft.filled_count(), 3);
    }

    #[test]
    fn test_fit_rejects_empty_word() {
        let draft = DraftGrid::new(3);
        assert!(draft.fit(&[], Position::new(0, 0), Direction::East).is_none());
    }

    #[test]
    fn test_try_place_gives_up_on_oversized_word() {
        let mut draft = DraftGrid::new(3);
        let mut rng = Pcg64::seed_from_u64(7);
        assert!(draft.try_place(&chars("LOUIS"), 300, &mut rng).is_none());
        assert_eq!(draft.filled_count(), 0);
    }

    #[test]
    fn test_fill_uses_filler_alphabet() {
        let mut draft = DraftGrid::new(5);
        let mut rng = Pcg64::seed_from_u64(1);
        let word = chars("ÑU");
        let positions = draft
            .fit(&word, Position::new(0, 0), Direction::South)
            .expect("fits");
        draft.commit(&word, &positions);
        let grid = draft.fill(&mut rng);
        for (pos, cell) in grid.cells() {
            if positions.contains(&pos) {
                continue;
            }
            assert!(cell.letter().is_ascii_uppercase(), "{pos}: {}", cell.letter());
        }
        assert_eq!(grid[Position::new(0, 0)].letter(), 'Ñ');
    }
}
