use std::mem;

use pupiletra_core::{Position, Puzzle, PuzzleConfig};
use pupiletra_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

use crate::{Selection, SelectionUpdate};

/// Result of releasing the pointer.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum ReleaseOutcome {
    /// No gesture was in progress, or it covered fewer than two cells.
    Discarded,
    /// The selected letters spell no unfound word in either direction.
    NoMatch {
        /// The letters under the selection, in drag order.
        letters: String,
    },
    /// The selection revealed a word.
    Found {
        /// Index of the placement in [`Puzzle::placements`].
        placement: usize,
        /// The word that was found.
        word: String,
        /// `true` if this was the last unfound word.
        solved: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Gesture {
    Idle,
    Dragging(Selection),
}

/// A word-search game session.
///
/// Owns the current [`Puzzle`] and tracks the drag gesture, the words found so
/// far, and the number of successful moves. Pointer events are processed in
/// the order they are delivered; each call runs to completion.
///
/// # Example
///
/// ```
/// use pupiletra_core::PuzzleConfig;
/// use pupiletra_game::Game;
///
/// let config = PuzzleConfig::new(["cat"], 4).unwrap();
/// let mut game = Game::new(config);
///
/// // Drag across the cells of the hidden word
/// let positions = game.puzzle().placements()[0].positions().to_vec();
/// game.pointer_down(positions[0]);
/// for &pos in &positions[1..] {
///     game.pointer_enter(pos);
/// }
/// assert!(game.pointer_up().is_found());
///
/// assert_eq!(game.moves(), 1);
/// assert_eq!(game.found_words(), ["CAT"]);
/// assert!(game.is_all_found());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    config: PuzzleConfig,
    puzzle: Puzzle,
    seed: PuzzleSeed,
    omitted_words: Vec<String>,
    found_words: Vec<String>,
    moves: usize,
    gesture: Gesture,
}

impl Game {
    /// Starts a game with a freshly generated puzzle.
    #[must_use]
    pub fn new(config: PuzzleConfig) -> Self {
        let generated = PuzzleGenerator::new(&config).generate();
        Self::from_generated(config, generated)
    }

    /// Starts a game with the puzzle determined by `seed`.
    #[must_use]
    pub fn with_seed(config: PuzzleConfig, seed: PuzzleSeed) -> Self {
        let generated = PuzzleGenerator::new(&config).generate_with_seed(seed);
        Self::from_generated(config, generated)
    }

    /// Starts a game from an already generated puzzle.
    #[must_use]
    pub fn from_generated(config: PuzzleConfig, generated: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            puzzle,
            seed,
            omitted_words,
        } = generated;
        Self {
            config,
            puzzle,
            seed,
            omitted_words,
            found_words: Vec::new(),
            moves: 0,
            gesture: Gesture::Idle,
        }
    }

    /// Returns the configuration used to generate puzzles.
    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Returns the current puzzle, including its `found` flags.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the seed of the current puzzle.
    #[must_use]
    pub fn seed(&self) -> PuzzleSeed {
        self.seed
    }

    /// Returns the configured words that did not fit in the current puzzle.
    #[must_use]
    pub fn omitted_words(&self) -> &[String] {
        &self.omitted_words
    }

    /// Returns the distinct words found so far, in the order they were found.
    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    /// Returns the number of successful selections.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Returns the cells of the gesture in progress, or an empty slice when idle.
    #[must_use]
    pub fn selection(&self) -> &[Position] {
        match &self.gesture {
            Gesture::Idle => &[],
            Gesture::Dragging(selection) => selection.cells(),
        }
    }

    /// Returns `true` while a pointer gesture is in progress.
    #[must_use]
    pub fn is_selecting(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging(_))
    }

    /// Returns `true` if the puzzle has at least one word and all are found.
    #[must_use]
    pub fn is_all_found(&self) -> bool {
        self.puzzle.is_solved()
    }

    /// Handles the pointer being pressed on `pos`.
    ///
    /// Any previous selection is discarded, even when `pos` lies outside the
    /// grid and no new selection starts.
    pub fn pointer_down(&mut self, pos: Position) -> SelectionUpdate {
        self.gesture = Gesture::Idle;
        if !self.puzzle.grid().contains(pos) {
            log::debug!("ignoring pointer down outside the grid at {pos}");
            return SelectionUpdate::Ignored;
        }
        self.gesture = Gesture::Dragging(Selection::new(pos));
        SelectionUpdate::Started
    }

    /// Handles the pointer entering `pos` while pressed.
    ///
    /// Events while idle, outside the grid, or off the selection's line are
    /// ignored.
    pub fn pointer_enter(&mut self, pos: Position) -> SelectionUpdate {
        if !self.puzzle.grid().contains(pos) {
            return SelectionUpdate::Ignored;
        }
        match &mut self.gesture {
            Gesture::Idle => SelectionUpdate::Ignored,
            Gesture::Dragging(selection) => selection.extend(pos),
        }
    }

    /// Handles the pointer being released and resolves the selection.
    ///
    /// The letters under the selection are compared, forwards and backwards,
    /// against every unfound placement. The first match is marked found, its
    /// word joins the found words, and the move counter increases by one.
    /// The selection is cleared in every case.
    pub fn pointer_up(&mut self) -> ReleaseOutcome {
        let Gesture::Dragging(selection) = mem::replace(&mut self.gesture, Gesture::Idle) else {
            return ReleaseOutcome::Discarded;
        };
        if selection.len() < 2 {
            return ReleaseOutcome::Discarded;
        }

        let cells = selection.into_cells();
        let Some(letters) = self.puzzle.grid().read(&cells) else {
            return ReleaseOutcome::Discarded;
        };
        let Some(index) = self.puzzle.find_unfound_match(&letters) else {
            log::debug!("selection {letters:?} matches no unfound word");
            return ReleaseOutcome::NoMatch { letters };
        };

        self.puzzle.mark_found(index);
        let word = self.puzzle.placements()[index].word().to_owned();
        self.record_found(&word);
        self.moves += 1;

        let solved = self.puzzle.is_solved();
        log::info!(
            "found {word:?} ({}/{}) in {} moves",
            self.puzzle.found_count(),
            self.puzzle.placements().len(),
            self.moves
        );
        ReleaseOutcome::Found {
            placement: index,
            word,
            solved,
        }
    }

    /// Marks every word as found, cancelling any gesture in progress.
    ///
    /// The found words become the full configured word list, including words
    /// that could not be placed. The move counter is left unchanged.
    pub fn reveal_all(&mut self) {
        self.gesture = Gesture::Idle;
        let revealed = self.puzzle.reveal_all();
        self.found_words = self.config.distinct_words();
        log::info!("revealed {revealed} remaining words");
    }

    /// Replaces the puzzle with a new one generated from the same configuration.
    ///
    /// Found words, the selection, and the move counter are reset.
    pub fn regenerate(&mut self) {
        let generated = PuzzleGenerator::new(&self.config).generate();
        self.replace_puzzle(generated);
    }

    /// Replaces the puzzle with the one determined by `seed`.
    ///
    /// Found words, the selection, and the move counter are reset.
    pub fn regenerate_with_seed(&mut self, seed: PuzzleSeed) {
        let generated = PuzzleGenerator::new(&self.config).generate_with_seed(seed);
        self.replace_puzzle(generated);
    }

    fn replace_puzzle(&mut self, generated: GeneratedPuzzle) {
        let GeneratedPuzzle {
            puzzle,
            seed,
            omitted_words,
        } = generated;
        log::info!("new puzzle from seed {seed}");
        self.puzzle = puzzle;
        self.seed = seed;
        self.omitted_words = omitted_words;
        self.found_words.clear();
        self.moves = 0;
        self.gesture = Gesture::Idle;
    }

    fn record_found(&mut self, word: &str) {
        if !self.found_words.iter().any(|found| found == word) {
            self.found_words.push(word.to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use pupiletra_core::{Direction, LetterGrid, Placement};

    use super::*;

    // G A T O
    // X O X X
    // X X C X
    // N A L A
    fn fixed_game() -> Game {
        let grid = LetterGrid::from_letters(4, "GATOXOXXXXCXNALA".chars()).expect("16 letters");
        let row = |r: usize, cols: [usize; 4]| cols.map(|c| Position::new(r, c)).to_vec();
        let gato = Placement::new("GATO".to_owned(), row(0, [0, 1, 2, 3]));
        // stored in word order, so it reads right to left on the grid
        let alan = Placement::new("ALAN".to_owned(), row(3, [3, 2, 1, 0]));
        let puzzle = Puzzle::new(grid, vec![gato, alan]);
        assert_eq!(puzzle.validate(), Ok(()));

        let config = PuzzleConfig::new(["gato", "alan", "perro"], 4).expect("valid config");
        let generated = GeneratedPuzzle {
            puzzle,
            seed: PuzzleSeed::from_phrase("fixed"),
            omitted_words: vec!["PERRO".to_owned()],
        };
        Game::from_generated(config, generated)
    }

    fn drag(game: &mut Game, cells: &[Position]) -> ReleaseOutcome {
        game.pointer_down(cells[0]);
        for &pos in &cells[1..] {
            game.pointer_enter(pos);
        }
        game.pointer_up()
    }

    fn line(start: Position, direction: Direction, len: usize) -> Vec<Position> {
        (0..len)
            .map(|i| start.step(direction, i, 4).expect("in bounds"))
            .collect()
    }

    #[test]
    fn test_forward_match() {
        let mut game = fixed_game();
        let outcome = drag(&mut game, &line(Position::new(0, 0), Direction::East, 4));
        assert_eq!(
            outcome,
            ReleaseOutcome::Found {
                placement: 0,
                word: "GATO".to_owned(),
                solved: false,
            }
        );
        assert_eq!(game.moves(), 1);
        assert_eq!(game.found_words(), ["GATO"]);
        assert!(game.puzzle().placements()[0].is_found());
        for col in 0..4 {
            assert!(game.puzzle().grid()[Position::new(0, col)].is_found());
        }
        assert!(game.selection().is_empty());
        assert!(!game.is_selecting());
    }

    #[test]
    fn test_reversed_match() {
        let mut game = fixed_game();
        // dragging "OTAG" from right to left
        let outcome = drag(&mut game, &line(Position::new(0, 3), Direction::West, 4));
        assert!(matches!(outcome, ReleaseOutcome::Found { placement: 0, .. }));

        // ALAN is stored right to left; dragging left to right reads "NALA"
        let outcome = drag(&mut game, &line(Position::new(3, 0), Direction::East, 4));
        assert_eq!(
            outcome,
            ReleaseOutcome::Found {
                placement: 1,
                word: "ALAN".to_owned(),
                solved: true,
            }
        );
        assert_eq!(game.moves(), 2);
        assert!(game.is_all_found());
    }

    #[test]
    fn test_partial_word_does_not_match() {
        let mut game = fixed_game();
        let outcome = drag(&mut game, &line(Position::new(0, 0), Direction::East, 3));
        assert_eq!(
            outcome,
            ReleaseOutcome::NoMatch {
                letters: "GAT".to_owned()
            }
        );
        assert_eq!(game.moves(), 0);
        assert!(game.found_words().is_empty());
        assert_eq!(game.puzzle().found_count(), 0);
    }

    #[test]
    fn test_found_word_cannot_be_found_twice() {
        let mut game = fixed_game();
        let gato = line(Position::new(0, 0), Direction::East, 4);
        assert!(drag(&mut game, &gato).is_found());
        assert!(drag(&mut game, &gato).is_no_match());

        let reversed: Vec<_> = gato.iter().rev().copied().collect();
        assert!(drag(&mut game, &reversed).is_no_match());
        assert_eq!(game.moves(), 1);
        assert_eq!(game.found_words(), ["GATO"]);
    }

    #[test]
    fn test_duplicate_placements_are_matched_independently() {
        // A B
        // B A
        let grid = LetterGrid::from_letters(2, "ABBA".chars()).expect("4 letters");
        let first = Placement::new(
            "AB".to_owned(),
            vec![Position::new(0, 0), Position::new(0, 1)],
        );
        let second = Placement::new(
            "AB".to_owned(),
            vec![Position::new(1, 1), Position::new(1, 0)],
        );
        let config = PuzzleConfig::new(["ab", "ab"], 2).expect("valid config");
        let mut game = Game::from_generated(
            config,
            GeneratedPuzzle {
                puzzle: Puzzle::new(grid, vec![first, second]),
                seed: PuzzleSeed::from_phrase("dup"),
                omitted_words: Vec::new(),
            },
        );

        // Any "AB"/"BA" run matches the first unfound placement.
        assert!(drag(&mut game, &[Position::new(0, 0), Position::new(0, 1)]).is_found());
        assert!(!game.is_all_found());
        assert!(drag(&mut game, &[Position::new(1, 0), Position::new(1, 1)]).is_found());
        assert!(game.is_all_found());
        assert_eq!(game.moves(), 2);
        assert_eq!(game.found_words(), ["AB"]);
    }

    #[test]
    fn test_tap_is_discarded() {
        let mut game = fixed_game();
        game.pointer_down(Position::new(0, 0));
        assert_eq!(game.selection(), [Position::new(0, 0)]);
        assert_eq!(game.pointer_up(), ReleaseOutcome::Discarded);
        assert!(game.selection().is_empty());
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_events_while_idle_are_ignored() {
        let mut game = fixed_game();
        assert!(game.pointer_enter(Position::new(0, 1)).is_ignored());
        assert!(game.selection().is_empty());
        assert_eq!(game.pointer_up(), ReleaseOutcome::Discarded);
    }

    #[test]
    fn test_out_of_bounds_events_are_ignored() {
        let mut game = fixed_game();
        assert!(game.pointer_down(Position::new(4, 0)).is_ignored());
        assert!(!game.is_selecting());

        game.pointer_down(Position::new(0, 3));
        assert!(game.pointer_enter(Position::new(0, 4)).is_ignored());
        assert_eq!(game.selection(), [Position::new(0, 3)]);
    }

    #[test]
    fn test_out_of_bounds_pointer_down_clears_selection() {
        let mut game = fixed_game();
        game.pointer_down(Position::new(0, 0));
        game.pointer_enter(Position::new(0, 1));
        game.pointer_enter(Position::new(0, 2));

        assert!(game.pointer_down(Position::new(0, 7)).is_ignored());
        assert!(!game.is_selecting());
        assert!(game.selection().is_empty());
        // the abandoned drag can no longer be completed
        assert!(game.pointer_enter(Position::new(0, 3)).is_ignored());
        assert_eq!(game.pointer_up(), ReleaseOutcome::Discarded);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_empty_word_list_is_never_solved() {
        let config = PuzzleConfig::new(Vec::<String>::new(), 4).expect("valid config");
        let mut game = Game::with_seed(config, PuzzleSeed::from_phrase("empty"));
        assert!(game.puzzle().placements().is_empty());
        assert!(game.omitted_words().is_empty());
        assert_eq!(game.puzzle().grid().size(), 4);
        assert!(!game.is_all_found());

        let cells = line(Position::new(0, 0), Direction::East, 4);
        assert!(drag(&mut game, &cells).is_no_match());

        game.reveal_all();
        assert!(!game.is_all_found());
        assert!(game.found_words().is_empty());
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_pointer_down_restarts_selection() {
        let mut game = fixed_game();
        game.pointer_down(Position::new(0, 0));
        game.pointer_enter(Position::new(0, 1));
        assert!(game.pointer_down(Position::new(3, 0)).is_started());
        assert_eq!(game.selection(), [Position::new(3, 0)]);
    }

    #[test]
    fn test_selection_grows_monotonically() {
        let mut game = fixed_game();
        game.pointer_down(Position::new(0, 0));
        let events = [
            Position::new(1, 1),
            Position::new(0, 1),
            Position::new(2, 2),
            Position::new(1, 1),
            Position::new(3, 3),
            Position::new(3, 2),
        ];
        let mut previous_len = game.selection().len();
        for pos in events {
            game.pointer_enter(pos);
            let cells = game.selection();
            assert!(cells.len() >= previous_len);
            previous_len = cells.len();
        }
        assert_eq!(game.selection(), line(Position::new(0, 0), Direction::SouthEast, 4));
    }

    #[test]
    fn test_reveal_all() {
        let mut game = fixed_game();
        game.pointer_down(Position::new(0, 0));
        game.reveal_all();

        assert!(game.is_all_found());
        assert!(!game.is_selecting());
        assert_eq!(game.found_words(), ["GATO", "ALAN", "PERRO"]);
        assert_eq!(game.moves(), 0);
        for placement in game.puzzle().placements() {
            for &pos in placement.positions() {
                assert!(game.puzzle().grid()[pos].is_found());
            }
        }
        assert_eq!(game.puzzle().validate(), Ok(()));

        // Nothing is left to find afterwards
        let outcome = drag(&mut game, &line(Position::new(0, 0), Direction::East, 4));
        assert!(outcome.is_no_match());
    }

    #[test]
    fn test_regenerate_resets_progress() {
        let mut game = fixed_game();
        drag(&mut game, &line(Position::new(0, 0), Direction::East, 4));
        game.pointer_down(Position::new(1, 1));
        assert_eq!(game.moves(), 1);

        let seed = PuzzleSeed::from_phrase("again");
        game.regenerate_with_seed(seed);
        assert_eq!(game.moves(), 0);
        assert!(game.found_words().is_empty());
        assert!(game.selection().is_empty());
        assert_eq!(game.seed(), seed);
        assert_eq!(game.puzzle().found_count(), 0);
        assert_eq!(game.puzzle().validate(), Ok(()));

        game.reveal_all();
        game.regenerate();
        assert_eq!(game.moves(), 0);
        assert!(game.found_words().is_empty());
        assert!(!game.is_all_found());
    }

    #[test]
    fn test_generated_cat_example() {
        let config = PuzzleConfig::new(["CAT"], 4).expect("valid config");
        let mut game = Game::with_seed(config, PuzzleSeed::from_phrase("cat"));
        let cat = game.puzzle().placements()[0].clone();
        assert_eq!(game.puzzle().grid().read(cat.positions()).as_deref(), Some("CAT"));

        let outcome = drag(&mut game, cat.positions());
        assert!(matches!(outcome, ReleaseOutcome::Found { solved: true, .. }));
        assert_eq!(game.moves(), 1);
        assert_eq!(game.found_words(), ["CAT"]);
    }

    #[test]
    fn test_clone_keeps_snapshots_independent() {
        let mut game = fixed_game();
        let snapshot = game.clone();
        drag(&mut game, &line(Position::new(0, 0), Direction::East, 4));
        assert_eq!(snapshot.moves(), 0);
        assert_eq!(snapshot.puzzle().found_count(), 0);
        assert_ne!(snapshot, game);
    }
}
