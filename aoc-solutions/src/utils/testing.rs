//! Table-driven example checks for solver tests

use crate::utils::input::sanitize;
use aoc_solver::{AocParser, Solver, SolverExt};

/// One worked example from a puzzle description
pub(crate) struct Example {
    pub name: &'static str,
    pub input: &'static str,
    pub part: u8,
    pub expected: &'static str,
}

/// Parse each example's sanitized input with `S` and compare the answer for
/// its part, naming the failing row.
pub(crate) fn check_examples<S>(examples: &[Example])
where
    S: Solver,
{
    for example in examples {
        let input = sanitize(example.input);
        let label = format!("Part {} - {}", example.part, example.name);

        let mut shared = match <S as AocParser>::parse(&input) {
            Ok(shared) => shared,
            Err(e) => panic!("{label}: parse failed: {e}"),
        };
        match S::solve_part_checked_range(&mut shared, example.part) {
            Ok(actual) => assert_eq!(actual, example.expected, "{label}"),
            Err(e) => panic!("{label}: solve failed: {e}"),
        }
    }
}
