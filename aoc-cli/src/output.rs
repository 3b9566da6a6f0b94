//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::fmt::Display;

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Only answers on stdout, errors on stderr
    Quiet,
    /// Answers with timings and a summary
    Normal,
    /// Normal output plus `[debug]` diagnostics on stderr
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message unless quiet
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode)
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print a warning unless quiet
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Output formatter for solver results
pub struct OutputFormatter {
    verbosity: Verbosity,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match self.verbosity {
            Verbosity::Quiet => match &result.answer {
                Ok(answer) => println!("{}", answer),
                Err(e) => eprintln!("Error: {}", e),
            },
            Verbosity::Normal | Verbosity::Debug => match format_result(result) {
                Ok(line) => println!("{}", line),
                Err(line) => eprintln!("{}", line),
            },
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.verbosity == Verbosity::Quiet {
            return;
        }

        let total = results.len();
        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = total - successes;

        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", successes, failures);
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        let elapsed = TimeDelta::from_std(self.start_time.elapsed())
            .map(format_duration)
            .unwrap_or_else(|_| "N/A".to_string());
        println!("Elapsed wall-clock time: {}", elapsed);
    }
}

/// Render one result line, `Err` for lines that belong on stderr
fn format_result(result: &SolverResult) -> Result<String, String> {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);

    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            Ok(format!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration)
            ))
        }
        Err(e) => Err(format!("{}: Error - {}", prefix, e)),
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{SolveError, SolverError};

    fn result(answer: Result<String, SolverError>, parse: Option<i64>) -> SolverResult {
        SolverResult {
            year: 2022,
            day: 5,
            part: 1,
            answer,
            parse_duration: parse.map(TimeDelta::microseconds),
            solve_duration: TimeDelta::microseconds(1500),
        }
    }

    #[test]
    fn test_verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(42)), "42µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-42)), "-42µs");
    }

    #[test]
    fn test_format_success_line() {
        let line = format_result(&result(Ok("CMZ".to_string()), Some(12))).unwrap();
        assert_eq!(line, "2022/05 Part 1: CMZ (parse: 12µs, solve: 1.50ms)");

        let line = format_result(&result(Ok("CMZ".to_string()), None)).unwrap();
        assert_eq!(line, "2022/05 Part 1: CMZ (solve: 1.50ms)");
    }

    #[test]
    fn test_format_error_line() {
        let error = SolverError::SolveError(SolveError::PartNotImplemented(1));
        let line = format_result(&result(Err(error), None)).unwrap_err();
        assert_eq!(line, "2022/05 Part 1: Error - part 1 has no solver");
    }
}
