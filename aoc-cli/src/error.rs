//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Logging setup error
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Failure to load the input for one puzzle
#[derive(Error, Debug)]
pub enum InputError {
    /// No input file at the expected path
    #[error("No input for {year}/{day:02} at {}", path.display())]
    Missing { year: u16, day: u8, path: PathBuf },

    /// IO error
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single part produced no answer
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Solver(#[from] aoc_solver::SolverError),
}
