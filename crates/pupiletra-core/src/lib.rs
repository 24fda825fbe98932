//! Core data structures for word-search puzzles.
//!
//! This crate provides the data model shared by puzzle generation and
//! gameplay: positions and directions on a square grid, the letter grid
//! itself, the recorded placement of every target word, and the puzzle that
//! ties them together.
//!
//! # Overview
//!
//! - [`Position`] and [`Direction`]: coordinates and the eight straight-line steps
//! - [`Cell`] and [`LetterGrid`]: the square grid of letters with `found` flags
//! - [`Placement`]: where a target word lies on the grid
//! - [`Puzzle`]: a grid with its placements, plus invariant checks
//! - [`PuzzleConfig`]: the word list and grid size accepted at start-up
//!
//! # Examples
//!
//! ```
//! use pupiletra_core::{LetterGrid, Placement, Position, Puzzle};
//!
//! // G A T O
//! // X X X X
//! // X X X X
//! // X X X X
//! let grid = LetterGrid::from_letters(4, "GATOXXXXXXXXXXXX".chars()).unwrap();
//! let positions = (0..4).map(|col| Position::new(0, col)).collect();
//! let mut puzzle = Puzzle::new(grid, vec![Placement::new("GATO".to_owned(), positions)]);
//!
//! assert!(puzzle.validate().is_ok());
//! let index = puzzle.find_unfound_match("GATO").unwrap();
//! puzzle.mark_found(index);
//! assert!(puzzle.is_solved());
//! ```

pub mod config;
pub mod direction;
pub mod grid;
pub mod placement;
pub mod position;
pub mod puzzle;
pub mod word;

pub use self::{
    config::{ConfigError, DEFAULT_SIZE, DEFAULT_WORDS, PuzzleConfig},
    direction::Direction,
    grid::{Cell, LetterGrid},
    placement::Placement,
    position::Position,
    puzzle::{Puzzle, PuzzleError},
    word::{normalize_word, reverse_word, word_len},
};
