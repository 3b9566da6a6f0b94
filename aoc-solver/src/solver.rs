//! Parse-once, solve-per-part traits

use crate::error::{ParseError, SolveError};

/// Turns raw puzzle text into the data every part works on
///
/// `SharedData` may borrow from the input (`&'a str`) or own a parsed model.
/// Parts get it by `&mut`, so anything one part leaves behind is visible to
/// the next.
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// /// One pile per line, bottom crate first: `ZN` is `N` stacked on `Z`
/// struct Piles;
///
/// impl AocParser for Piles {
///     type SharedData<'a> = Vec<Vec<char>>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         let piles: Vec<Vec<char>> = input.lines().map(|l| l.chars().collect()).collect();
///         if piles.is_empty() {
///             return Err(ParseError::MissingData("no piles".into()));
///         }
///         Ok(piles)
///     }
/// }
///
/// assert_eq!(Piles::parse("ZN\nMCD").unwrap()[1], vec!['M', 'C', 'D']);
/// ```
pub trait AocParser {
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Answers part `N`
///
/// Implement one per part and let `#[derive(AocSolver)]` route part numbers
/// to them.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
///
/// struct Piles;
///
/// impl AocParser for Piles {
///     type SharedData<'a> = Vec<Vec<char>>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().map(|l| l.chars().collect()).collect())
///     }
/// }
///
/// /// Top crate of every non-empty pile
/// impl PartSolver<1> for Piles {
///     fn solve(piles: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(piles.iter().filter_map(|p| p.last()).collect())
///     }
/// }
///
/// let mut piles = Piles::parse("ZN\nMCD\nP").unwrap();
/// assert_eq!(<Piles as PartSolver<1>>::solve(&mut piles).unwrap(), "NDP");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Runtime part dispatch
///
/// Normally derived. A hand-written impl must answer `PartNotImplemented`
/// for parts it does not handle:
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Piles;
///
/// impl AocParser for Piles {
///     type SharedData<'a> = Vec<Vec<char>>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().map(|l| l.chars().collect()).collect())
///     }
/// }
///
/// impl Solver for Piles {
///     const PARTS: u8 = 2;
///
///     fn solve_part(piles: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(piles.iter().filter_map(|p| p.last()).collect()),
///             2 => Ok(piles.iter().map(Vec::len).sum::<usize>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut piles = Piles::parse("ZN\nMCD").unwrap();
/// assert_eq!(Piles::solve_part(&mut piles, 2).unwrap(), "5");
/// ```
pub trait Solver: AocParser {
    /// Parts are numbered `1..=PARTS`
    const PARTS: u8;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked part dispatch, implemented for every [`Solver`]
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but parts outside `1..=PARTS` fail with
    /// `PartOutOfRange` without reaching the solver
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
