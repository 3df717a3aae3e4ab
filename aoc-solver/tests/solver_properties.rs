//! Property tests for part dispatch, part-range checks and plugin registration

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError, Solver,
    SolverExt, SolverRegistryBuilder,
};
use proptest::prelude::*;

/// Rows of digits; part 1 sums every digit, part 2 sums the row maxima and
/// caches the row count for later parts.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 25, tags = ["test", "digits"])]
struct DigitRows;

#[derive(Debug)]
struct Rows {
    rows: Vec<Vec<u32>>,
    row_count: Option<usize>,
}

impl AocParser for DigitRows {
    type SharedData<'a> = Rows;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let rows = input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.chars()
                    .map(|c| {
                        c.to_digit(10)
                            .ok_or_else(|| ParseError::InvalidFormat(format!("not a digit: {c}")))
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Rows {
            rows,
            row_count: None,
        })
    }
}

impl PartSolver<1> for DigitRows {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.rows.iter().flatten().sum::<u32>().to_string())
    }
}

impl PartSolver<2> for DigitRows {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.row_count = Some(shared.rows.len());
        let total: u32 = shared
            .rows
            .iter()
            .map(|row| row.iter().copied().max().unwrap_or(0))
            .sum();
        Ok(total.to_string())
    }
}

fn render(rows: &[Vec<u32>]) -> String {
    rows.iter()
        .map(|row| row.iter().map(|d| d.to_string()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn digit_rows() -> impl Strategy<Value = Vec<Vec<u32>>> {
    prop::collection::vec(prop::collection::vec(0u32..10, 1..8), 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn solve_part_dispatches_to_part_solver(rows in digit_rows(), part in 1u8..=2) {
        let input = render(&rows);
        let mut via_dispatch = DigitRows::parse(&input).unwrap();
        let mut direct = DigitRows::parse(&input).unwrap();

        let dispatched = DigitRows::solve_part(&mut via_dispatch, part).unwrap();
        let expected = match part {
            1 => <DigitRows as PartSolver<1>>::solve(&mut direct).unwrap(),
            _ => <DigitRows as PartSolver<2>>::solve(&mut direct).unwrap(),
        };
        prop_assert_eq!(dispatched, expected);
    }

    #[test]
    fn unknown_parts_are_not_implemented(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = DigitRows::parse("12").unwrap();
        match DigitRows::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "expected PartNotImplemented, got {:?}", other),
        }
    }

    #[test]
    fn checked_range_rejects_outside_parts(part in 0u8..=255) {
        let mut shared = DigitRows::parse("12").unwrap();
        let result = DigitRows::solve_part_checked_range(&mut shared, part);
        if (1..=DigitRows::PARTS).contains(&part) {
            prop_assert!(result.is_ok());
        } else {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
            }
        }
    }

    #[test]
    fn later_parts_see_earlier_mutations(rows in digit_rows()) {
        let mut shared = DigitRows::parse(&render(&rows)).unwrap();
        prop_assert_eq!(shared.row_count, None);
        DigitRows::solve_part(&mut shared, 2).unwrap();
        prop_assert_eq!(shared.row_count, Some(rows.len()));
    }
}

#[test]
fn derive_sets_part_count() {
    assert_eq!(DigitRows::PARTS, 2);
}

#[test]
fn plugin_is_collected_with_tags() {
    let registry = SolverRegistryBuilder::new()
        .register_plugins(|plugin| plugin.tags.contains(&"digits"))
        .unwrap()
        .build();

    let info = registry.get_info(2015, 25).unwrap();
    assert_eq!(info.parts, 2);
    assert_eq!(info.tags, &["test", "digits"]);

    let mut solver = registry.create_solver(2015, 25, "19\n23").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "15");
    assert_eq!(solver.solve(2).unwrap().answer, "12");
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());
}

#[test]
fn filtered_out_plugins_are_not_registered() {
    let registry = SolverRegistryBuilder::new()
        .register_plugins(|plugin| plugin.tags.contains(&"no-such-tag"))
        .unwrap()
        .build();
    assert!(!registry.contains(2015, 25));
}

#[test]
fn parse_errors_surface_through_registry() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();
    assert!(matches!(
        registry.create_solver(2015, 25, "1x"),
        Err(aoc_solver::SolverError::ParseError(ParseError::InvalidFormat(_)))
    ));
}
