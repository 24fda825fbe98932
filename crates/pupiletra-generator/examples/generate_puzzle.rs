//! Example demonstrating word-search puzzle generation.
//!
//! This example shows how to:
//! - Build a `PuzzleConfig` from the command line
//! - Generate a puzzle from a random or fixed seed
//! - Display the grid, the placements, and any omitted words
//! - Sample many seeds in parallel to measure how often words are omitted
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Use your own words and grid size:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 10 --word gato --word perro
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```
//!
//! Estimate the omission rate over many seeds:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --samples 10000
//! ```

use std::process;

use clap::Parser;
use pupiletra_core::{DEFAULT_SIZE, PuzzleConfig};
use pupiletra_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid side length.
    #[arg(long, value_name = "SIZE", default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Word to hide. Repeatable. Defaults to the built-in word list.
    #[arg(short, long = "word", value_name = "WORD")]
    words: Vec<String>,

    /// Seed to generate from, as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "samples")]
    seed: Option<PuzzleSeed>,

    /// Number of random seeds to sample for omission statistics.
    #[arg(long, value_name = "COUNT")]
    samples: Option<usize>,
}

fn main() {
    let args = Args::parse();
    let config = if args.words.is_empty() {
        PuzzleConfig::new(PuzzleConfig::default().words(), args.size)
    } else {
        PuzzleConfig::new(&args.words, args.size)
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid configuration: {err}");
            process::exit(2);
        }
    };
    let generator = PuzzleGenerator::new(&config);

    if let Some(samples) = args.samples {
        if samples == 0 {
            eprintln!("--samples must be at least 1.");
            process::exit(1);
        }
        print_samples(&generator, samples);
        return;
    }

    let puzzle = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };
    print_puzzle(&puzzle);
}

fn print_samples(generator: &PuzzleGenerator<'_>, samples: usize) {
    let omitted: Vec<usize> = (0..samples)
        .into_par_iter()
        .map(|_| generator.generate().omitted_words.len())
        .collect();

    let total: usize = omitted.iter().sum();
    let complete = omitted.iter().filter(|&&count| count == 0).count();
    let worst = omitted.iter().copied().max().unwrap_or(0);

    println!("Samples: {samples}");
    println!("  Complete puzzles: {complete}");
    println!("  Omitted words (total): {total}");
    println!("  Omitted words (worst puzzle): {worst}");
}

fn print_puzzle(generated: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", generated.seed);
    println!();

    println!("Grid:");
    for line in generated.puzzle.grid().to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Placements:");
    for placement in generated.puzzle.placements() {
        let start = placement.positions()[0];
        let direction = placement
            .direction()
            .map_or_else(|| "-".to_owned(), |d| d.to_string());
        println!("  {} at {start} heading {direction}", placement.word());
    }

    if !generated.omitted_words.is_empty() {
        println!();
        println!("Omitted:");
        for word in &generated.omitted_words {
            println!("  {word}");
        }
    }
}
