//! Errors raised while parsing, solving and registering puzzles

use thiserror::Error;

/// Why an input could not be turned into a solver's shared data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input does not follow the puzzle's notation
    #[error("malformed input: {0}")]
    InvalidFormat(String),
    /// The input is absent or ends early
    #[error("missing input: {0}")]
    MissingData(String),
}

#[derive(Debug, Error)]
pub enum SolveError {
    /// Within `1..=PARTS` but without a `PartSolver` impl
    #[error("part {0} has no solver")]
    PartNotImplemented(u8),
    /// Outside `1..=PARTS`
    #[error("part {0} is out of range")]
    PartOutOfRange(u8),
    /// The part ran and failed on this input
    #[error("part failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors from [`SolverRegistry`](crate::SolverRegistry) lookups and the
/// solvers it creates
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("no solver registered for {0} day {1}")]
    NotFound(u16, u8),
    #[error("{0} day {1} is outside the supported calendar")]
    InvalidYearDay(u16, u8),
    #[error(transparent)]
    ParseError(#[from] ParseError),
    #[error(transparent)]
    SolveError(#[from] SolveError),
}

/// Rejected [`SolverRegistryBuilder`](crate::SolverRegistryBuilder) registrations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("a solver for {0} day {1} is already registered")]
    DuplicateSolver(u16, u8),
    #[error("cannot register a solver for {0} day {1}: outside the supported calendar")]
    InvalidYearDay(u16, u8),
}
