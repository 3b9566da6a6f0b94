//! Sequential executor for running solvers

use crate::config::Config;
use crate::inputs::InputStore;
use crate::output::{Verbosity, debug};
use aoc_solver::{ParseError, SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    /// Parse time, reported on the first part run from each parsed input
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs every selected solver in year/day/part order
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
    verbosity: Verbosity,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, inputs: InputStore, config: &Config) -> Self {
        Self {
            registry,
            inputs,
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
            verbosity: config.verbosity,
        }
    }

    pub fn inputs(&self) -> &InputStore {
        &self.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .storage()
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Execute all work items, handing each result over as it completes
    pub fn execute<F>(&self, mut on_result: F)
    where
        F: FnMut(SolverResult),
    {
        for work in self.collect_work_items() {
            self.run_work_item(&work, &mut on_result);
        }
    }

    /// Run one solver over its selected parts
    ///
    /// A missing input or a parse failure becomes an error result for every
    /// requested part.
    fn run_work_item<F>(&self, work: &WorkItem, on_result: &mut F)
    where
        F: FnMut(SolverResult),
    {
        let (year, day) = (work.year, work.day);
        debug(
            format!("reading {}", self.inputs.path(year, day).display()),
            self.verbosity,
        );

        let input = match self.inputs.get(year, day) {
            Ok(input) => input,
            Err(e) => {
                let message = e.to_string();
                for part in work.parts.clone() {
                    on_result(error_result(
                        year,
                        day,
                        part,
                        SolverError::ParseError(ParseError::MissingData(message.clone())),
                    ));
                }
                return;
            }
        };

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(e) => {
                for part in work.parts.clone() {
                    on_result(error_result(year, day, part, replicate(&e)));
                }
                return;
            }
        };

        let mut parse_duration = Some(solver.parse_time());
        debug(
            format!(
                "{}/{:02} parsed {} bytes in {}µs",
                year,
                day,
                input.len(),
                solver.parse_time().num_microseconds().unwrap_or_default()
            ),
            self.verbosity,
        );

        for part in work.parts.clone() {
            let result = match solver.solve(part) {
                Ok(solved) => SolverResult {
                    year,
                    day,
                    part: solved.part,
                    solve_duration: solved.elapsed,
                    answer: Ok(solved.value),
                    parse_duration: parse_duration.take(),
                },
                Err(e) => SolverResult {
                    parse_duration: parse_duration.take(),
                    ..error_result(year, day, part, e.into())
                },
            };
            on_result(result);
        }
    }
}

/// Create an error result for a part that never ran
fn error_result(year: u16, day: u8, part: u8, error: SolverError) -> SolverResult {
    SolverResult {
        year,
        day,
        part,
        answer: Err(error),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

/// Copies a solver creation error so each part can report it
///
/// Creating a solver only parses, so it never fails with a solve error.
fn replicate(error: &SolverError) -> SolverError {
    match error {
        SolverError::NotFound(year, day) => SolverError::NotFound(*year, *day),
        SolverError::InvalidYearDay(year, day) => SolverError::InvalidYearDay(*year, *day),
        SolverError::ParseError(e) => SolverError::ParseError(e.clone()),
        SolverError::SolveError(e) => unreachable!("solver creation reported a solve error: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solutions::my_solutions::year_2022::day_5::Solver as Day5;
    use aoc_solver::{SolveError, SolverRegistryBuilder};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const SAMPLE: &str = "    [D]    \n[N] [C]    \n[Z] [M] [P]\n 1   2   3 \n\nmove 1 from 2 to 1\nmove 3 from 1 to 3\nmove 2 from 2 to 1\nmove 1 from 1 to 2\n";

    fn config(part: Option<u8>) -> Config {
        Config {
            year_filter: None,
            day_filter: None,
            part_filter: part,
            tags: Vec::new(),
            input_dir: Path::new("unused").to_path_buf(),
            input_file: None,
            verbosity: Verbosity::Quiet,
        }
    }

    fn executor(dir: &Path, part: Option<u8>) -> Executor {
        let registry = SolverRegistryBuilder::new()
            .register_solver::<Day5>(2022, 5)
            .unwrap()
            .build();
        Executor::new(registry, InputStore::new(dir.to_path_buf()), &config(part))
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let mut results = Vec::new();
        executor.execute(|result| results.push(result));
        results
    }

    #[test]
    fn test_runs_all_parts_in_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2022_day05.txt"), SAMPLE).unwrap();

        let results = run(&executor(temp.path(), None));
        let answers: Vec<_> = results
            .iter()
            .map(|r| (r.part, r.answer.as_ref().unwrap().as_str()))
            .collect();
        assert_eq!(answers, vec![(1, "CMZ"), (2, "MCD")]);
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_part_filter() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2022_day05.txt"), SAMPLE).unwrap();

        let executor = executor(temp.path(), Some(2));
        assert_eq!(
            executor.collect_work_items(),
            vec![WorkItem {
                year: 2022,
                day: 5,
                parts: 2..=2
            }]
        );
        let results = run(&executor);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].answer.as_deref().unwrap(), "MCD");
    }

    #[test]
    fn test_missing_input_reports_every_part() {
        let temp = TempDir::new().unwrap();
        let results = run(&executor(temp.path(), None));

        assert_eq!(results.len(), 2);
        for result in &results {
            assert!(matches!(
                result.answer,
                Err(SolverError::ParseError(ParseError::MissingData(_)))
            ));
        }
    }

    #[test]
    fn test_parse_failure_reports_every_part() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2022_day05.txt"), "[A] [B\n 1   2\n").unwrap();

        let results = run(&executor(temp.path(), None));
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| matches!(
            r.answer,
            Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
        )));
    }

    #[test]
    fn test_solve_failure_keeps_going() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2022_day05.txt"), "[A]\n 1   2\n\nmove 2 from 1 to 2\n").unwrap();

        let results = run(&executor(temp.path(), None));
        assert_eq!(results.len(), 2);
        assert!(matches!(
            results[0].answer,
            Err(SolverError::SolveError(SolveError::SolveFailed(_)))
        ));
        assert!(results[0].parse_duration.is_some());
    }

    #[test]
    fn test_replicate_keeps_error_kind() {
        let parse = SolverError::ParseError(ParseError::InvalidFormat("bad".to_string()));
        assert!(matches!(
            replicate(&parse),
            SolverError::ParseError(ParseError::InvalidFormat(message)) if message == "bad"
        ));
        assert!(matches!(
            replicate(&SolverError::NotFound(2022, 5)),
            SolverError::NotFound(2022, 5)
        ));
    }

    #[test]
    #[should_panic(expected = "solve error")]
    fn test_replicate_rejects_solve_error() {
        replicate(&SolverError::SolveError(SolveError::PartOutOfRange(3)));
    }
}
