//! Puzzle configuration: the target word list and the grid size.

use crate::{normalize_word, word_len};

/// Side length used when no size is configured.
pub const DEFAULT_SIZE: usize = 20;

/// Word list used when no words are configured.
pub const DEFAULT_WORDS: [&str; 24] = [
    "LIAM",
    "HARRY",
    "ZAYN",
    "LOUIS",
    "NIALL",
    "GATOS",
    "WILLUMP",
    "NUNU",
    "JAUJA",
    "NALA",
    "RODO",
    "COCO",
    "GRETA",
    "BOBIS",
    "ESTERNOCLLEIDOMASTOIDEO",
    "NEGRO",
    "BLANCO",
    "ARQUITECTURA",
    "MAKIS",
    "PIZZA",
    "MALECON",
    "BESOS",
    "HELADO",
    "GUIÑO",
];

/// Errors returned when building a [`PuzzleConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The grid size was zero.
    #[display("grid size must be at least 1")]
    ZeroSize,
}

/// Configuration accepted at start-up: what to hide, and in how large a grid.
///
/// Words are normalized to uppercase and blank entries are dropped.
/// Duplicates are kept; each occurrence becomes its own placement. An empty
/// word list is accepted and yields puzzles without placements.
///
/// # Examples
///
/// ```
/// use pupiletra_core::{ConfigError, PuzzleConfig};
///
/// let config = PuzzleConfig::new(["cat", "Dog", "  "], 5).unwrap();
/// assert_eq!(config.words(), ["CAT", "DOG"]);
/// assert_eq!(config.size(), 5);
///
/// assert_eq!(PuzzleConfig::new(["cat"], 0), Err(ConfigError::ZeroSize));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleConfig {
    words: Vec<String>,
    size: usize,
}

impl PuzzleConfig {
    /// Creates a configuration from raw words and a grid size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroSize`] if `size` is zero.
    pub fn new<I, S>(words: I, size: usize) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        let words = words
            .into_iter()
            .map(|word| normalize_word(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();
        Ok(Self { words, size })
    }

    /// Returns the normalized words, in input order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the grid side length.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the normalized words with duplicates removed, keeping first occurrences.
    #[must_use]
    pub fn distinct_words(&self) -> Vec<String> {
        let mut distinct: Vec<String> = Vec::with_capacity(self.words.len());
        for word in &self.words {
            if !distinct.contains(word) {
                distinct.push(word.clone());
            }
        }
        distinct
    }

    /// Returns the words that cannot fit in the grid in any direction.
    pub fn oversized_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words
            .iter()
            .filter(|word| word_len(word) > self.size)
            .map(String::as_str)
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| normalize_word(w)).collect(),
            size: DEFAULT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fits_longest_word() {
        let config = PuzzleConfig::default();
        assert_eq!(config.size(), 20);
        assert_eq!(config.words().len(), DEFAULT_WORDS.len());
        // ESTERNOCLLEIDOMASTOIDEO is longer than the default grid
        assert_eq!(
            config.oversized_words().collect::<Vec<_>>(),
            vec!["ESTERNOCLLEIDOMASTOIDEO"]
        );
    }

    #[test]
    fn test_accepts_empty_word_list() {
        let config = PuzzleConfig::new(Vec::<String>::new(), 5).unwrap();
        assert!(config.words().is_empty());
        assert_eq!(config.size(), 5);

        let config = PuzzleConfig::new(["", " "], 4).unwrap();
        assert!(config.words().is_empty());
        assert!(config.distinct_words().is_empty());

        assert_eq!(
            PuzzleConfig::new(Vec::<String>::new(), 0),
            Err(ConfigError::ZeroSize)
        );
    }

    #[test]
    fn test_keeps_duplicates_but_reports_distinct() {
        let config = PuzzleConfig::new(["nala", "NALA", "coco"], 6).unwrap();
        assert_eq!(config.words(), ["NALA", "NALA", "COCO"]);
        assert_eq!(config.distinct_words(), vec!["NALA", "COCO"]);
    }
}
