//! Command-line arguments and their mapping onto a puzzle configuration.

use std::{fs, io, path::PathBuf};

use clap::Parser;
use pupiletra_core::{ConfigError, DEFAULT_SIZE, DEFAULT_WORDS, PuzzleConfig};
use pupiletra_generator::PuzzleSeed;

/// Errors raised while turning arguments into a configuration.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SetupError {
    /// The words file could not be read.
    #[display("failed to read words file {}: {source}", path.display())]
    ReadWords {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The resulting configuration was rejected.
    #[display("invalid configuration: {_0}")]
    Config(#[from] ConfigError),
}

/// Generate and play a word-search puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(author, version = crate::version::build_version(), about)]
pub struct Args {
    /// Grid side length.
    #[arg(short, long, value_name = "SIZE", default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Word to hide (case-insensitive). Repeatable.
    #[arg(short, long = "word", value_name = "WORD")]
    pub words: Vec<String>,

    /// File with one word per line. Blank lines and lines starting with `#` are skipped.
    #[arg(long, value_name = "PATH")]
    pub words_file: Option<PathBuf>,

    /// Seed to generate the first puzzle from, as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "seed_phrase")]
    pub seed: Option<PuzzleSeed>,

    /// Phrase to derive the first puzzle's seed from.
    #[arg(long, value_name = "TEXT")]
    pub seed_phrase: Option<String>,

    /// Print the solution sheet after the puzzle.
    #[arg(long)]
    pub solution: bool,

    /// Play interactively, reading commands from standard input.
    #[arg(long)]
    pub play: bool,
}

impl Args {
    /// Builds the puzzle configuration from `--word`, `--words-file`, and `--size`.
    ///
    /// Falls back to the built-in word list when neither word source is given.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] if the words file cannot be read or the
    /// configuration is invalid.
    pub fn puzzle_config(&self) -> Result<PuzzleConfig, SetupError> {
        let mut words = self.words.clone();
        if let Some(path) = &self.words_file {
            let text = fs::read_to_string(path).map_err(|source| SetupError::ReadWords {
                path: path.clone(),
                source,
            })?;
            words.extend(parse_word_list(&text));
        }
        if words.is_empty() && self.words_file.is_none() {
            words = DEFAULT_WORDS.iter().map(|&w| w.to_owned()).collect();
        }
        Ok(PuzzleConfig::new(words, self.size)?)
    }

    /// Returns the seed requested for the first puzzle, if any.
    #[must_use]
    pub fn initial_seed(&self) -> Option<PuzzleSeed> {
        self.seed
            .or_else(|| self.seed_phrase.as_deref().map(PuzzleSeed::from_phrase))
    }
}

/// Splits a words file into entries, skipping blanks and `#` comments.
#[must_use]
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect()
}
