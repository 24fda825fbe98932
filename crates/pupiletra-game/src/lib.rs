//! Word-search game session management.
//!
//! This crate turns a generated [`Puzzle`](pupiletra_core::Puzzle) into a
//! playable session: it consumes pointer events, keeps the in-progress drag
//! selection on a straight line, resolves released selections against the
//! unfound words, and tracks found words and moves.
//!
//! # Gesture protocol
//!
//! A gesture is `pointer_down`, any number of `pointer_enter`, then
//! `pointer_up`:
//!
//! - `pointer_down` starts a new selection at the pressed cell.
//! - The first `pointer_enter` on a neighbouring cell locks the direction.
//! - Later `pointer_enter` events are accepted only when they continue the
//!   locked line by exactly one cell.
//! - `pointer_up` resolves selections of two or more cells and clears the
//!   selection.
//!
//! Events that do not fit the protocol are ignored rather than reported as
//! errors.

pub use self::{
    game::{Game, ReleaseOutcome},
    selection::{Selection, SelectionUpdate},
};

mod game;
mod selection;
