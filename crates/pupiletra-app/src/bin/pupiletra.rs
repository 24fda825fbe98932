//! Pupiletra terminal application.
//!
//! Prints a generated word-search puzzle and optionally plays it interactively.

use std::{
    io::{self, Write as _},
    process::ExitCode,
};

use clap::Parser as _;
use pupiletra_app::{action_handler, cli::Args, render, version};
use pupiletra_game::Game;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    log::info!("Starting Pupiletra, version={}", version::build_version());

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.puzzle_config()?;
    let mut game = match args.initial_seed() {
        Some(seed) => Game::with_seed(config, seed),
        None => Game::new(config),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.play {
        action_handler::run(&mut game, io::stdin().lock(), &mut out)?;
    } else {
        action_handler::write_intro(&game, &mut out)?;
    }
    if args.solution {
        writeln!(out, "solution:")?;
        write!(out, "{}", render::Solution(game.puzzle()))?;
    }
    Ok(())
}
