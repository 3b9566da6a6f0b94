use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::schematic::{Document, MoveMode};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 5, tags = ["schematic", "parsing"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Document;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .parse::<Document>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        rearrange(shared, MoveMode::OneAtATime)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        rearrange(shared, MoveMode::Bulk)
    }
}

/// Runs every move on a copy of the parsed document and reads the tops
///
/// Both parts start from the same drawing, so the shared document is left
/// untouched.
fn rearrange(document: &Document, mode: MoveMode) -> Result<String, SolveError> {
    let mut working = document.clone();
    for (step, &instruction) in document.instructions().iter().enumerate() {
        check_move(&working, step + 1, instruction.count, instruction.from, instruction.to)
            .map_err(|e| SolveError::SolveFailed(e.into()))?;
        working.apply(instruction, mode);
    }
    Ok(working.top_labels())
}

fn check_move(
    document: &Document,
    step: usize,
    count: usize,
    from: usize,
    to: usize,
) -> Result<(), anyhow::Error> {
    let source = document
        .stack(from)
        .ok_or_else(|| anyhow!("(move {}) source stack {} does not exist", step, from))?;
    if document.stack(to).is_none() {
        bail!("(move {}) destination stack {} does not exist", step, to);
    }
    if source.len() < count {
        bail!(
            "(move {}) stack {} holds {} crates, cannot move {}",
            step,
            from,
            source.len(),
            count
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "    [D]    \n[N] [C]    \n[Z] [M] [P]\n 1   2   3 \n\nmove 1 from 2 to 1\nmove 3 from 1 to 3\nmove 2 from 2 to 1\nmove 1 from 1 to 2\n";

    #[test]
    fn test_sample() {
        let mut shared = <Solver as AocParser>::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "CMZ");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "MCD");
    }

    #[test]
    fn test_parts_do_not_share_moves() {
        let mut shared = <Solver as AocParser>::parse(SAMPLE).unwrap();
        let before = shared.clone();
        <Solver as PartSolver<2>>::solve(&mut shared).unwrap();
        assert_eq!(shared, before);
    }

    #[test]
    fn test_parse_error_is_invalid_format() {
        let err = <Solver as AocParser>::parse("[A] [B\n 1   2").unwrap_err();
        let ParseError::InvalidFormat(message) = err else {
            panic!("expected InvalidFormat, got {:?}", err);
        };
        assert!(message.contains("line 1"));
    }

    #[test]
    fn test_overdrawn_stack_fails_instead_of_panicking() {
        let mut shared = <Solver as AocParser>::parse("[A]\n 1   2\n\nmove 2 from 1 to 2").unwrap();
        let err = Solver::solve_part(&mut shared, 1).unwrap_err();
        assert!(err.to_string().contains("stack 1 holds 1 crates, cannot move 2"));
    }

    #[test]
    fn test_unknown_stack_fails() {
        let mut shared = <Solver as AocParser>::parse("[A]\n 1\n\nmove 1 from 1 to 9").unwrap();
        let err = Solver::solve_part(&mut shared, 2).unwrap_err();
        assert!(err.to_string().contains("destination stack 9 does not exist"));
    }
}
