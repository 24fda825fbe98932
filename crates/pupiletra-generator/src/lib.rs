//! Word-search puzzle generator.
//!
//! Lays a list of target words onto a square grid along the eight straight
//! directions and fills the remaining cells with random letters.
//!
//! # Algorithm
//!
//! 1. Words are normalized to uppercase and sorted longest first, since long
//!    words have the fewest free runs left once the grid starts filling up.
//! 2. For each word, up to [`MAX_PLACEMENT_ATTEMPTS`] random tries pick a
//!    direction and an anchor cell. A try succeeds when the whole run stays
//!    inside the grid and every already-filled cell on it holds the same
//!    letter the word needs there.
//! 3. If every try fails, the word is retried with its characters reversed
//!    (a second full budget). The placement still records the original word,
//!    with positions listed in reading order of that word.
//! 4. A word that fails both budgets is omitted from the puzzle and reported
//!    in [`GeneratedPuzzle::omitted_words`].
//! 5. Every empty cell receives a letter drawn uniformly from
//!    [`FILLER_ALPHABET`].
//!
//! Generation is a pure function of the configuration and the random source.
//! [`PuzzleGenerator::generate_with_seed`] is fully reproducible.
//!
//! # Examples
//!
//! ```
//! use pupiletra_core::PuzzleConfig;
//! use pupiletra_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let config = PuzzleConfig::new(["cat", "dog", "owl"], 6).unwrap();
//! let generator = PuzzleGenerator::new(&config);
//!
//! let seed = PuzzleSeed::from_phrase("example");
//! let generated = generator.generate_with_seed(seed);
//! assert_eq!(generated.seed, seed);
//! assert!(generated.puzzle.validate().is_ok());
//!
//! // Same seed, same puzzle
//! assert_eq!(generator.generate_with_seed(seed).puzzle, generated.puzzle);
//! ```

use pupiletra_core::{Placement, Position, Puzzle, PuzzleConfig, reverse_word};
use rand::{SeedableRng as _, prelude::*};
use rand_pcg::Pcg64;

pub use self::seed::{ParseSeedError, PuzzleSeed};
use self::draft::DraftGrid;

mod draft;
mod seed;

/// Number of random tries per word orientation before giving up on it.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 300;

/// Letters used to fill cells not covered by any word.
pub const FILLER_ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A generated puzzle along with the data needed to reproduce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The generated puzzle.
    pub puzzle: Puzzle,
    /// The seed the puzzle was generated from.
    pub seed: PuzzleSeed,
    /// Words that could not be placed in either orientation, in processing order.
    pub omitted_words: Vec<String>,
}

/// Generates word-search puzzles for a fixed configuration.
#[derive(Debug, Clone)]
pub struct PuzzleGenerator<'a> {
    config: &'a PuzzleConfig,
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator for the given word list and grid size.
    #[must_use]
    pub fn new(config: &'a PuzzleConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this generator uses.
    #[must_use]
    pub fn config(&self) -> &'a PuzzleConfig {
        self.config
    }

    /// Generates a puzzle from a freshly drawn random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let (puzzle, omitted_words) = self.generate_with_rng(&mut rng);
        log::debug!(
            "generated {0}x{0} puzzle with {1} placements from seed {seed}",
            self.config.size(),
            puzzle.placements().len()
        );
        GeneratedPuzzle {
            puzzle,
            seed,
            omitted_words,
        }
    }

    /// Generates a puzzle drawing every random choice from `rng`.
    ///
    /// Returns the puzzle and the words that could not be placed.
    pub fn generate_with_rng<R>(&self, rng: &mut R) -> (Puzzle, Vec<String>)
    where
        R: Rng + ?Sized,
    {
        let size = self.config.size();
        for word in self.config.oversized_words() {
            log::warn!("word {word:?} is longer than the {size}x{size} grid");
        }

        let mut words: Vec<&str> = self.config.words().iter().map(String::as_str).collect();
        // stable: equally long words keep their input order
        words.sort_by_key(|word| std::cmp::Reverse(word.chars().count()));

        let mut draft = DraftGrid::new(size);
        let mut placements = Vec::with_capacity(words.len());
        let mut omitted = Vec::new();

        for word in words {
            match place_word(&mut draft, word, rng) {
                Some(positions) => placements.push(Placement::new(word.to_owned(), positions)),
                None => {
                    log::warn!(
                        "could not place {word:?} after {MAX_PLACEMENT_ATTEMPTS} attempts per orientation"
                    );
                    omitted.push(word.to_owned());
                }
            }
        }

        let puzzle = Puzzle::new(draft.fill(rng), placements);
        debug_assert_eq!(puzzle.validate(), Ok(()));
        (puzzle, omitted)
    }
}

/// Places `word` forwards or, failing that, reversed.
///
/// The returned positions always spell `word` in order.
fn place_word<R>(draft: &mut DraftGrid, word: &str, rng: &mut R) -> Option<Vec<Position>>
where
    R: Rng + ?Sized,
{
    let forward: Vec<char> = word.chars().collect();
    if let Some(positions) = draft.try_place(&forward, MAX_PLACEMENT_ATTEMPTS, rng) {
        return Some(positions);
    }

    log::debug!("retrying {word:?} reversed");
    place_reversed(draft, word, MAX_PLACEMENT_ATTEMPTS, rng)
}

/// Places the reversed spelling of `word`, returning positions that read
/// `word` forwards.
fn place_reversed<R>(
    draft: &mut DraftGrid,
    word: &str,
    attempts: usize,
    rng: &mut R,
) -> Option<Vec<Position>>
where
    R: Rng + ?Sized,
{
    let reversed: Vec<char> = reverse_word(word).chars().collect();
    let mut positions = draft.try_place(&reversed, attempts, rng)?;
    positions.reverse();
    Some(positions)
}
