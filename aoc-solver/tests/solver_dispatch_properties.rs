//! Property-based tests for `#[derive(AocSolver)]` part dispatch

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
use proptest::prelude::*;

/// One pile of crate labels per line, bottom first
#[derive(Debug, Clone)]
struct Piles {
    piles: Vec<Vec<char>>,
    moved: Option<usize>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct PileSolver;

impl AocParser for PileSolver {
    type SharedData<'a> = Piles;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let piles = input
            .lines()
            .map(|line| {
                if line.chars().all(|c| c.is_ascii_uppercase()) {
                    Ok(line.chars().collect())
                } else {
                    Err(ParseError::InvalidFormat(format!("bad pile '{}'", line)))
                }
            })
            .collect::<Result<_, _>>()?;
        Ok(Piles { piles, moved: None })
    }
}

// Tops of every non-empty pile
impl PartSolver<1> for PileSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.piles.iter().filter_map(|p| p.last()).collect())
    }
}

// Flattens everything onto the first pile, remembering how many crates moved
impl PartSolver<2> for PileSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let Some((first, rest)) = shared.piles.split_first_mut() else {
            return Err(SolveError::SolveFailed("no piles".into()));
        };
        let mut moved = 0;
        for pile in rest {
            moved += pile.len();
            first.append(pile);
        }
        shared.moved = Some(moved);
        Ok(first.iter().collect())
    }
}

fn render(piles: &[Vec<char>]) -> String {
    piles
        .iter()
        .map(|p| p.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn pile_strategy() -> impl Strategy<Value = Vec<Vec<char>>> {
    prop::collection::vec(
        prop::collection::vec(prop::char::range('A', 'Z'), 1..5),
        1..6,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `Solver::solve_part(N)` behaves exactly like `PartSolver<N>::solve`.
    #[test]
    fn solve_part_dispatches_to_part_solver(piles in pile_strategy(), part in 1u8..=2) {
        let input = render(&piles);
        let mut shared1 = <PileSolver as AocParser>::parse(&input).unwrap();
        let mut shared2 = <PileSolver as AocParser>::parse(&input).unwrap();

        let dispatched = <PileSolver as Solver>::solve_part(&mut shared1, part).unwrap();
        let direct = match part {
            1 => <PileSolver as PartSolver<1>>::solve(&mut shared2),
            2 => <PileSolver as PartSolver<2>>::solve(&mut shared2),
            _ => unreachable!(),
        }
        .unwrap();

        prop_assert_eq!(dispatched, direct);
    }

    /// Parts the derive does not know about are `PartNotImplemented`.
    #[test]
    fn unknown_part_is_not_implemented(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = <PileSolver as AocParser>::parse("AB\nC").unwrap();

        match <PileSolver as Solver>::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "Expected PartNotImplemented, got {:?}", other),
        }
    }

    /// Mutations made by one part are visible afterwards.
    #[test]
    fn mutation_is_shared_between_parts(piles in pile_strategy()) {
        let input = render(&piles);
        let expected_moved: usize = piles.iter().skip(1).map(Vec::len).sum();
        let mut shared = <PileSolver as AocParser>::parse(&input).unwrap();

        <PileSolver as Solver>::solve_part(&mut shared, 2).unwrap();
        prop_assert_eq!(shared.moved, Some(expected_moved));

        let tops = <PileSolver as Solver>::solve_part(&mut shared, 1).unwrap();
        let last_label = piles.last().and_then(|p| p.last()).copied().unwrap();
        prop_assert!(tops.starts_with(last_label));
    }
}

#[test]
fn test_parts_constant() {
    assert_eq!(<PileSolver as Solver>::PARTS, 2);
}
