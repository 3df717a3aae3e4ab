//! Cheapest path across a [`WeightedGrid`] when the walker must keep going
//! straight for a bounded number of steps.
//!
//! A walker enters a cell by paying its cost. It may continue straight or
//! turn 90 degrees, never reverse, and:
//!
//! - must take at least `min_run` steps in a heading before turning,
//! - may take at most `max_run` steps in a heading,
//! - only counts as arriving at `end` with a run of at least `min_run`.
//!
//! The search is uniform-cost over `(position, heading, run)` states. Entry
//! costs are non-negative, so the first time the goal leaves the frontier its
//! cost is minimal.
//!
//! ```
//! use aoc_solutions::utils::grid::WeightedGrid;
//! use aoc_solutions::utils::search::{RunLimits, shortest_path};
//!
//! let grid = WeightedGrid::parse("1119\n9919\n9911").unwrap();
//! let limits = RunLimits::new(1, 3).unwrap();
//! assert_eq!(shortest_path(&grid, grid.top_left(), grid.bottom_right(), limits), Some(5));
//! ```

use crate::utils::collections::{PriorityQueue, Set};
use crate::utils::grid::{Direction, Point, WeightedGrid};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunLimitsError {
    #[error("max_run must be at least 1")]
    ZeroMax,
    #[error("max_run {max} is below min_run {min}")]
    MaxBelowMin { min: u32, max: u32 },
}

/// Bounds on consecutive steps in one heading.
///
/// A `min_run` of 0 behaves like 1: every move is at least one step long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunLimits {
    min_run: u32,
    max_run: u32,
}

impl RunLimits {
    pub fn new(min_run: u32, max_run: u32) -> Result<Self, RunLimitsError> {
        let min_run = min_run.max(1);
        if max_run == 0 {
            return Err(RunLimitsError::ZeroMax);
        }
        if max_run < min_run {
            return Err(RunLimitsError::MaxBelowMin {
                min: min_run,
                max: max_run,
            });
        }
        Ok(Self { min_run, max_run })
    }

    pub fn min_run(&self) -> u32 {
        self.min_run
    }

    pub fn max_run(&self) -> u32 {
        self.max_run
    }

    /// Headings allowed from `state` with the run length each one results in
    fn moves(self, state: SearchState) -> impl Iterator<Item = (Direction, u32)> {
        let can_turn = state.run >= self.min_run;
        state
            .heading
            .neighbours()
            .into_iter()
            .filter_map(move |heading| {
                if heading == state.heading {
                    (state.run < self.max_run).then_some((heading, state.run + 1))
                } else {
                    can_turn.then_some((heading, 1))
                }
            })
    }
}

/// Where the walker is, which way it faces and how many steps it has taken
/// in that heading. Two paths in the same state have the same future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchState {
    pub position: Point,
    pub heading: Direction,
    pub run: u32,
}

/// Result of [`search`] plus counters describing the work done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Minimum total cost, `None` when no path satisfies the limits
    pub cost: Option<u32>,
    /// Frontier entries popped, including the goal
    pub expanded: usize,
    /// Distinct transitions recorded as seen
    pub visited: usize,
}

/// Minimum cost from `start` to `end` under `limits`, or `None` when no
/// such path exists.
pub fn shortest_path(grid: &WeightedGrid, start: Point, end: Point, limits: RunLimits) -> Option<u32> {
    search(grid, start, end, limits).cost
}

/// Run the search and report its counters alongside the cost.
///
/// Reaching `end` from `end` costs 0 without moving. A `start` or `end`
/// outside the grid has no path.
pub fn search(grid: &WeightedGrid, start: Point, end: Point, limits: RunLimits) -> SearchOutcome {
    let mut outcome = SearchOutcome {
        cost: None,
        expanded: 0,
        visited: 0,
    };
    if !grid.contains(start) || !grid.contains(end) {
        return outcome;
    }
    if start == end {
        outcome.cost = Some(0);
        return outcome;
    }

    // A run of 0 can only go straight, so each seed leaves in its own heading
    let mut frontier: PriorityQueue<SearchState, u32> = PriorityQueue::new();
    for heading in Direction::ALL {
        let seed = SearchState {
            position: start,
            heading,
            run: 0,
        };
        frontier.push(seed, 0);
    }

    let mut seen: Set<SearchState> = Set::new();
    while let Some((state, cost)) = frontier.pop() {
        outcome.expanded += 1;
        if state.position == end && state.run >= limits.min_run {
            outcome.cost = Some(cost);
            break;
        }

        for (heading, run) in limits.moves(state) {
            let next = state.position + heading.delta();
            let Some(step_cost) = grid.get(next) else {
                continue;
            };
            // Keyed on the departing cell; the heading fixes where it lands.
            // Entry cost depends only on `next`, so the first push is the cheapest.
            let transition = SearchState {
                position: state.position,
                heading,
                run,
            };
            if !seen.insert(transition) {
                continue;
            }
            let arrived = SearchState {
                position: next,
                heading,
                run,
            };
            frontier.push(arrived, cost + step_cost);
        }
    }
    outcome.visited = seen.len();

    tracing::debug!(
        %start,
        %end,
        min_run = limits.min_run,
        max_run = limits.max_run,
        expanded = outcome.expanded,
        visited = outcome.visited,
        cost = ?outcome.cost,
        "constrained search finished"
    );
    outcome
}
