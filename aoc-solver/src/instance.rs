//! Parsed puzzle instances and their type-erased handle

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{TimeDelta, Utc};

/// Runs `f` and measures its wall-clock time
fn timed<T>(f: impl FnOnce() -> T) -> (T, TimeDelta) {
    let start = Utc::now();
    let value = f();
    (value, Utc::now() - start)
}

/// The answer to one part and the time spent computing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub part: u8,
    pub value: String,
    pub elapsed: TimeDelta,
}

/// Input parsed by `S`, ready to answer any of its parts
///
/// Parts share the parsed data, so a part that mutates it is seen by the
/// parts solved after it.
pub struct SolverInstance<'a, S: Solver> {
    shared: S::SharedData<'a>,
    parse_time: TimeDelta,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parses `input`, recording how long parsing took
    pub fn new(input: &'a str) -> Result<Self, ParseError> {
        let (shared, parse_time) = timed(|| S::parse(input));
        Ok(Self {
            shared: shared?,
            parse_time,
        })
    }

    /// The parsed data as the next part will see it
    pub fn shared(&self) -> &S::SharedData<'a> {
        &self.shared
    }
}

/// Object-safe view of a [`SolverInstance`], as handed out by the registry
pub trait DynSolver {
    /// Solves `part`, timing the call
    fn solve(&mut self, part: u8) -> Result<Answer, SolveError>;

    /// Time spent parsing the input
    fn parse_time(&self) -> TimeDelta;

    /// Number of parts the solver answers
    fn parts(&self) -> u8;
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<Answer, SolveError> {
        let (value, elapsed) = timed(|| S::solve_part_checked_range(&mut self.shared, part));
        Ok(Answer {
            part,
            value: value?,
            elapsed,
        })
    }

    fn parse_time(&self) -> TimeDelta {
        self.parse_time
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
