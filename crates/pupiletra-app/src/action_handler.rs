//! Applies prompt commands to a [`Game`].

use std::{
    io::{self, BufRead, Write},
    iter,
};

use pupiletra_core::{Direction, Position};
use pupiletra_game::{Game, ReleaseOutcome};

use crate::{
    action::{Action, HELP},
    render,
};

/// What the prompt loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Flow {
    /// Keep reading commands.
    Continue,
    /// Stop the session.
    Quit,
}

/// Applies `action` to `game` and writes any feedback to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn handle<W: Write>(game: &mut Game, action: Action, out: &mut W) -> io::Result<Flow> {
    match action {
        Action::Drag { from, to } => {
            game.pointer_down(from);
            for pos in drag_path(from, to) {
                game.pointer_enter(pos);
            }
            let outcome = game.pointer_up();
            report_release(game, &outcome, out)?;
        }
        Action::PointerDown(pos) => {
            if game.pointer_down(pos).is_ignored() {
                writeln!(
                    out,
                    "row {} column {} is outside the grid",
                    pos.row() + 1,
                    pos.col() + 1
                )?;
            }
            write!(out, "{}", render::Board::new(game.puzzle(), game.selection()))?;
        }
        Action::PointerEnter(pos) => {
            if game.pointer_enter(pos).is_ignored() {
                writeln!(out, "selection unchanged")?;
            }
            write!(out, "{}", render::Board::new(game.puzzle(), game.selection()))?;
        }
        Action::PointerUp => {
            let outcome = game.pointer_up();
            report_release(game, &outcome, out)?;
        }
        Action::Reveal => {
            game.reveal_all();
            write!(out, "{}", render::Board::new(game.puzzle(), &[]))?;
            write!(out, "{}", render::WordList(game))?;
        }
        Action::NewPuzzle(seed) => {
            match seed {
                Some(seed) => game.regenerate_with_seed(seed),
                None => game.regenerate(),
            }
            write_intro(game, out)?;
        }
        Action::ShowSeed => writeln!(out, "{}", game.seed())?,
        Action::ShowWords => write!(out, "{}", render::WordList(game))?,
        Action::Help => writeln!(out, "{HELP}")?,
        Action::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Runs the prompt loop until `quit` or end of input.
///
/// Lines that fail to parse are reported and skipped.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails.
pub fn run<R: BufRead, W: Write>(game: &mut Game, input: R, out: &mut W) -> io::Result<()> {
    write_intro(game, out)?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match line.parse::<Action>() {
                Ok(action) => {
                    log::debug!("command {action:?}");
                    if handle(game, action, out)?.is_quit() {
                        return Ok(());
                    }
                }
                Err(err) => writeln!(out, "{err} (type `help` for commands)")?,
            }
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

/// Writes the board and word list shown when a puzzle starts.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_intro<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    writeln!(out, "seed {}", game.seed())?;
    write!(out, "{}", render::Board::new(game.puzzle(), game.selection()))?;
    write!(out, "{}", render::WordList(game))
}

fn report_release<W: Write>(game: &Game, outcome: &ReleaseOutcome, out: &mut W) -> io::Result<()> {
    match outcome {
        ReleaseOutcome::Discarded => writeln!(out, "no selection"),
        ReleaseOutcome::NoMatch { letters } => writeln!(out, "{letters}: no match"),
        ReleaseOutcome::Found { word, solved, .. } => {
            writeln!(out, "found {word}!")?;
            write!(out, "{}", render::Board::new(game.puzzle(), &[]))?;
            if *solved {
                writeln!(out, "all words found in {} moves", game.moves())?;
            }
            Ok(())
        }
    }
}

/// Cells entered after `from` when dragging to `to`.
///
/// A straight line yields every cell after `from` up to and including `to`;
/// any other target yields just `to`, which the selection then ignores.
fn drag_path(from: Position, to: Position) -> Vec<Position> {
    let Some(direction) = Direction::between(from, to) else {
        return Vec::new();
    };
    let (dr, dc) = (
        to.row().abs_diff(from.row()),
        to.col().abs_diff(from.col()),
    );
    if dr != 0 && dc != 0 && dr != dc {
        return vec![to];
    }
    iter::successors(from.neighbor(direction), |pos| {
        (*pos != to).then(|| pos.neighbor(direction)).flatten()
    })
    .collect()
}
