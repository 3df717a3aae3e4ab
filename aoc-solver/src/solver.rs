//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses puzzle input into the data shared by every part.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// assert_eq!(Depths::parse("3\n4").unwrap(), vec![3, 4]);
/// ```
pub trait AocParser {
    /// Parsed input plus any intermediate results the parts want to share.
    ///
    /// Owned data is the simplest choice; borrow from the input with `'a`
    /// when no transformation is needed.
    type SharedData<'a>;

    /// Parse the raw input.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Implementing one `PartSolver<N>` per part and deriving
/// [`AocSolver`](crate::AocSolver) generates the [`Solver`] dispatch.
pub trait PartSolver<const N: u8>: AocParser {
    /// Produce the answer for part `N`.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete puzzle solver: parsing plus part dispatch.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Sums;
///
/// impl AocParser for Sums {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split(',')
///             .map(|n| n.trim().parse().map_err(|_| ParseError::InvalidFormat(n.into())))
///             .collect()
///     }
/// }
///
/// impl Solver for Sums {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i64>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Sums::parse("1, 2, 3").unwrap();
/// assert_eq!(Sums::solve_part(&mut shared, 1).unwrap(), "6");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve `part` (1-based) using the shared data
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked part dispatch, available on every [`Solver`].
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`] but rejects part 0 and parts above
    /// `PARTS` with [`SolveError::PartOutOfRange`].
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
