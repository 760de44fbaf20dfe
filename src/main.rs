//! Word Search Maker
//!
//! Generates word-search puzzles from a spec file listing the grid dimension
//! and the words with their directions. Words are placed by backtracking
//! search and the leftover cells are filled with random letters; an optional
//! lexicon vets the words first, replacing unknown ones.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use wordgrid::lexicon::Lexicon;
use wordgrid::{persistence, solver, PuzzleSpec, ALPHABET};

const SEPARATOR: &str = "--------------------------";

/// Generates word-search puzzles from spec files.
#[derive(Parser)]
#[command(name = "wordgrid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a word search from a puzzle spec file.
    Generate {
        /// Puzzle spec file (DIMENSION / WORDS format).
        spec: PathBuf,
        /// Word list used to vet the puzzle words; unknown words are
        /// replaced with random entries.
        #[arg(long)]
        lexicon: Option<PathBuf>,
        /// Also write the finished grid to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// RNG seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a previously saved word search.
    Show {
        /// File written by `generate --output`.
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate {
            spec,
            lexicon,
            output,
            seed,
        } => run_generate(&spec, lexicon.as_deref(), output.as_deref(), seed),
        Command::Show { file } => run_show(&file),
    };

    if let Err(error) = result {
        eprintln!("{error}");
        process::exit(1);
    }
}

/// Loads and vets the puzzle, runs the search, fills and prints the grid.
fn run_generate(
    spec: &Path,
    lexicon: Option<&Path>,
    output: Option<&Path>,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut puzzle = PuzzleSpec::parse(&fs::read_to_string(spec)?)?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if let Some(path) = lexicon {
        let lexicon = Lexicon::parse(&fs::read_to_string(path)?)?;
        for (old, new) in lexicon.vet(&mut puzzle, &mut rng)? {
            println!("Replacing {old} with {new}.");
        }
    }

    let Some(mut grid) = solver::generate(&puzzle, &mut rng) else {
        println!("There's no solution.");
        process::exit(2);
    };

    let alphabet: Vec<char> = ALPHABET.chars().collect();
    grid.fill_empty(&alphabet, &mut rng)?;

    println!("{SEPARATOR}");
    println!("{grid}");
    println!("{SEPARATOR}");

    if let Some(path) = output {
        persistence::save(&grid, path)?;
        println!("Saved to {}", path.display());
    }

    Ok(())
}

/// Prints a saved word search.
fn run_show(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let grid = persistence::load(file)?;
    println!("{SEPARATOR}");
    println!("{grid}");
    println!("{SEPARATOR}");
    Ok(())
}
