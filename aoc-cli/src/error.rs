//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input error
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),
}

/// Errors reading puzzle inputs
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No input file for the puzzle
    #[error("No input for {year}/day{day:02} at {}", path.display())]
    Missing { year: u16, day: u8, path: PathBuf },
}
