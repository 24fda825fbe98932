//! Terminal front end for the pupiletra word-search game.
//!
//! The binary prints a generated puzzle and, with `--play`, reads drag
//! commands from standard input and feeds them to a [`pupiletra_game::Game`].

pub mod action;
pub mod action_handler;
pub mod cli;
pub mod render;
pub mod version;
