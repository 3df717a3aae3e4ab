//! Advent of Code Solver Library
//!
//! A small framework for Advent of Code solutions: each puzzle is a type that
//! parses its input once and answers one or more parts from the parsed data.
//!
//! # Overview
//!
//! - [`AocParser`] turns raw input into per-puzzle shared data
//! - [`PartSolver<N>`] answers part `N`
//! - [`Solver`] dispatches part numbers, usually generated with
//!   `#[derive(AocSolver)]`
//! - [`SolverRegistryBuilder`] / [`SolverRegistry`] map `(year, day)` to
//!   solver factories, and `#[derive(AutoRegisterSolver)]` submits a solver
//!   for automatic registration
//! - [`DynSolver`] is the type-erased, timed view a runner works with
//!
//! # Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Calories;
//!
//! impl AocParser for Calories {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .split("\n\n")
//!             .map(|elf| {
//!                 elf.lines()
//!                     .map(|l| l.parse::<u32>().map_err(|e| ParseError::InvalidFormat(e.to_string())))
//!                     .sum::<Result<u32, ParseError>>()
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Calories {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().max().copied().unwrap_or_default().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Calories {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         shared.sort_unstable_by(|a, b| b.cmp(a));
//!         Ok(shared.iter().take(3).sum::<u32>().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Calories>(2022, 1, &[])
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2022, 1, "1\n2\n\n4\n\n3\n\n5").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "5");
//! assert_eq!(solver.solve(2).unwrap().answer, "12");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    DAYS_PER_YEAR, FIRST_YEAR, FactoryInfo, LAST_YEAR, PuzzleId, RegisterableSolver,
    SolverFactory, SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by the code `AutoRegisterSolver` generates
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
