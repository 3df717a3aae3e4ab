//! Parsed solver instances and their type-erased interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Answer for one part together with when solving started and ended
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Time spent solving
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Parsed input for one puzzle, ready to solve any of its parts.
///
/// Parts share `S::SharedData`, so a later part can reuse whatever an
/// earlier one cached there.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` with `S`, recording parse timing.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
        })
    }

    /// Borrow the parsed shared data
    pub fn shared(&self) -> &S::SharedData<'a> {
        &self.shared
    }
}

/// Uniform interface over solver instances of different types.
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(mut solver: Box<dyn DynSolver + '_>) -> Result<(), aoc_solver::SolveError> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("Part {part}: {} ({})", result.answer, result.duration());
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve `part`, recording timing
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// When parsing started (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// When parsing finished (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Puzzle year
    fn year(&self) -> u16;

    /// Puzzle day
    fn day(&self) -> u8;

    /// Number of parts the solver supports
    fn parts(&self) -> u8;

    /// Time spent parsing
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
