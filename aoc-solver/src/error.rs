//! Error types for the solver library

use thiserror::Error;

/// Error type for parsing puzzle input
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input doesn't match the expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from the input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part has no `PartSolver` implementation
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part is 0 or exceeds the solver's `PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The solver ran but could not produce an answer
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for registry lookups and solver creation
#[derive(Debug, Error)]
pub enum SolverError {
    /// Year or day outside the supported range
    #[error("Invalid puzzle {0}/{1:02}")]
    InvalidPuzzle(u16, u8),
    /// No solver registered for the given year and day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A solver is already registered for this year and day
    #[error("Duplicate solver registration for year {0} day {1}")]
    Duplicate(u16, u8),
    /// Year or day outside the supported range
    #[error("Cannot register solver for invalid puzzle {0}/{1:02}")]
    InvalidPuzzle(u16, u8),
}
