//! Plain-text rendering of the board.

use std::fmt::{self, Display};

use pupiletra_core::{Position, Puzzle};
use pupiletra_game::Game;

/// The grid with row and column labels.
///
/// Cells in the current selection are shown as `[X]`, cells of found words as
/// `(X)`, and every other cell as ` X `.
#[derive(Debug, Clone, Copy)]
pub struct Board<'a> {
    puzzle: &'a Puzzle,
    selection: &'a [Position],
}

impl<'a> Board<'a> {
    /// Creates a board view highlighting `selection`.
    #[must_use]
    pub fn new(puzzle: &'a Puzzle, selection: &'a [Position]) -> Self {
        Self { puzzle, selection }
    }
}

impl Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.puzzle.grid().size();
        let width = size.to_string().len();

        write!(f, "{:width$}", "")?;
        for col in 1..=size {
            write!(f, "{col:^3}")?;
        }
        writeln!(f)?;

        for (row, cells) in self.puzzle.grid().rows().enumerate() {
            write!(f, "{:>width$}", row + 1)?;
            for (col, cell) in cells.iter().enumerate() {
                let letter = cell.letter();
                if self.selection.contains(&Position::new(row, col)) {
                    write!(f, "[{letter}]")?;
                } else if cell.is_found() {
                    write!(f, "({letter})")?;
                } else {
                    write!(f, " {letter} ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The solution sheet: letters of placed words, with filler shown as `.`.
#[derive(Debug, Clone, Copy)]
pub struct Solution<'a>(pub &'a Puzzle);

impl Display for Solution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let puzzle = self.0;
        for (row, cells) in puzzle.grid().rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let pos = Position::new(row, col);
                let letter = if puzzle.placements().iter().any(|p| p.covers(pos)) {
                    cell.letter()
                } else {
                    '.'
                };
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{letter}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The word list with a check mark on each found word.
///
/// Words that did not fit in the grid are listed separately.
#[derive(Debug, Clone, Copy)]
pub struct WordList<'a>(pub &'a Game);

impl Display for WordList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        for placement in game.puzzle().placements() {
            let mark = if placement.is_found() { 'x' } else { ' ' };
            writeln!(f, "  [{mark}] {}", placement.word())?;
        }
        if !game.omitted_words().is_empty() {
            writeln!(f, "  not in this grid: {}", game.omitted_words().join(", "))?;
        }
        writeln!(
            f,
            "  found {}/{} in {} moves",
            game.puzzle().found_count(),
            game.puzzle().placements().len(),
            game.moves()
        )
    }
}
