//! Clumsy Crucible: least heat loss across a city of digit-cost blocks when
//! the crucible can only go straight for a limited number of blocks.

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::WeightedGrid;
use crate::utils::search::{RunLimits, shortest_path};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 17, tags = ["grid", "dijkstra"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = WeightedGrid;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        WeightedGrid::parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        least_heat_loss(shared, 0, 3)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        least_heat_loss(shared, 4, 10)
    }
}

fn least_heat_loss(city: &WeightedGrid, min_run: u32, max_run: u32) -> Result<String, SolveError> {
    let limits = RunLimits::new(min_run, max_run).map_err(|e| SolveError::SolveFailed(e.into()))?;
    let (start, end) = (city.top_left(), city.bottom_right());

    shortest_path(city, start, end, limits)
        .map(|cost| cost.to_string())
        .ok_or_else(|| {
            SolveError::SolveFailed(
                anyhow!(
                    "no path from {start} to {end} with runs of {}..={} blocks",
                    limits.min_run(),
                    limits.max_run()
                )
                .into(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::{Example, check_examples};
    use aoc_solver::SolverRegistryBuilder;

    const CITY: &str = "
        2413432311323
        3215453535623
        3255245654254
        3446585845452
        4546657867536
        1438598798454
        4457876987766
        3637877979653
        4654967986887
        4564679986453
        1224686865563
        2546548887735
        4322674655533
    ";

    const WALL_OF_NINES: &str = "
        111111111111
        999999999991
        999999999991
        999999999991
        999999999991
    ";

    #[test]
    fn examples() {
        check_examples::<Solver>(&[
            Example {
                name: "city",
                input: CITY,
                part: 1,
                expected: "102",
            },
            Example {
                name: "city",
                input: CITY,
                part: 2,
                expected: "94",
            },
            Example {
                name: "wall of nines",
                input: WALL_OF_NINES,
                part: 2,
                expected: "71",
            },
        ]);
    }

    #[test]
    fn unreachable_corner_is_an_error() {
        // Three blocks are too short for a four-block minimum run
        let mut city = Solver::parse("111").unwrap();
        let result = <Solver as PartSolver<2>>::solve(&mut city);
        match result {
            Err(SolveError::SolveFailed(e)) => assert!(e.to_string().contains("no path")),
            other => panic!("expected SolveFailed, got {other:?}"),
        }
    }

    #[test]
    fn non_digit_block_is_a_parse_error() {
        let err = Solver::parse("123\n4#6").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(ref msg) if msg.contains("column 2")));
    }

    #[test]
    fn registered_as_2023_day_17() {
        let registry = SolverRegistryBuilder::new()
            .register_plugins(|plugin| plugin.year == 2023 && plugin.day == 17)
            .unwrap()
            .build();

        let info = registry.get_info(2023, 17).unwrap();
        assert_eq!(info.parts, 2);
        assert!(info.tags.contains(&"dijkstra"));

        let mut solver = registry.create_solver(2023, 17, CITY).unwrap();
        assert_eq!(solver.solve(1).unwrap().answer, "102");
        assert_eq!(solver.solve(2).unwrap().answer, "94");
    }
}
