//! # Command Line Arguments and Pattern File Loading
//!
//! This module provides command line parsing for the two demo drivers and loading of
//! Game of Life starting patterns from text files:
//!
//! - `life`: runs the automaton and streams each generation to the terminal
//! - `perceptron`: trains the OR classifier and prints per-sample predictions
//!
//! ## Example Usage
//!
//! ```bash
//! # Reference 8x8 pattern for 50 generations at 5 frames per second
//! gol-perceptron life
//!
//! # Glider from a file, '*' marking live cells, as fast as possible
//! gol-perceptron life -i glider.txt -a '*' -n 200 --fps 0
//!
//! # Reproducible perceptron run
//! gol-perceptron perceptron --seed 7
//! ```

use std::{fs, path::Path, path::PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::{
    error::{Error, Result},
    grid::Grid,
    perceptron::{DEFAULT_ITERATIONS, DEFAULT_LEARNING_RATE},
};

#[derive(Parser)]
#[command(version, about = "Game of Life and perceptron demos")]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. "debug", "gol_perceptron=trace")
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run Conway's Game of Life on a toroidal board
    Life(LifeArgs),
    /// Train a perceptron on the OR truth table
    Perceptron(PerceptronArgs),
}

#[derive(Args)]
pub struct LifeArgs {
    /// File path to the starting pattern
    ///
    /// Each line is one row and all rows must have the same length. When omitted, the
    /// built-in 8x8 reference pattern is used.
    #[arg(short = 'i', long)]
    pub input_file: Option<PathBuf>,

    /// Number of generations to run
    #[arg(short = 'n', long, default_value_t = 50)]
    pub generations: usize,

    /// Symbol representing alive cells
    ///
    /// Any other character in the input file is a dead cell.
    #[arg(short = 'a', long, default_value = "X")]
    pub alive_symbol: char,

    /// Frames per second; 0 renders without delay
    #[arg(long, default_value_t = 5)]
    pub fps: u32,
}

#[derive(Args)]
pub struct PerceptronArgs {
    /// Step size applied to each weight correction
    #[arg(long, default_value_t = DEFAULT_LEARNING_RATE)]
    pub learning_rate: f64,

    /// Number of training iterations
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// Seed for weight initialisation and sample selection; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Imports a Game of Life starting pattern from a text file.
///
/// Every character equal to `alive_symbol` becomes a live cell and any other character a
/// dead one. Newlines separate rows; empty lines are skipped.
///
/// # Errors
///
/// - [`Error::Io`] if the file cannot be read or is not valid UTF-8
/// - [`Error::InvalidPattern`] if the file holds no rows or the rows differ in length
pub fn import_field(path: &Path, alive_symbol: char) -> Result<Grid> {
    let content = fs::read_to_string(path)?;
    parse_field(&content, alive_symbol)
}

/// Parses pattern text in the format accepted by [`import_field`].
pub fn parse_field(content: &str, alive_symbol: char) -> Result<Grid> {
    let lines: Vec<&str> = content.lines().filter(|line| !line.is_empty()).collect();

    if lines.is_empty() {
        return Err(Error::InvalidPattern(
            "pattern contains no valid grid data".to_string(),
        ));
    }

    // Width in characters so multi-byte alive symbols count once
    let width = lines[0].chars().count();
    let height = lines.len();

    for (i, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if len != width {
            return Err(Error::InvalidPattern(format!(
                "row {i} has length {len}, expected {width}"
            )));
        }
    }

    let mut cells = Vec::with_capacity(height * width);
    for line in lines {
        cells.extend(line.chars().map(|ch| u8::from(ch == alive_symbol)));
    }

    Grid::new(height, width, cells)
}
