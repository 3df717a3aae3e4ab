//! Sequential runner for registered solvers

use crate::config::Config;
use crate::error::RunError;
use crate::inputs::InputDir;
use aoc_solver::{DynSolver, SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use std::sync::Arc;
use tracing::{info, warn};

/// Result from a single part
pub struct PartResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    /// Shared between all parts of a puzzle whose input could not be used
    pub answer: Result<String, Arc<RunError>>,
    /// Set on the first part of each puzzle only
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// A registered solver selected by the filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
    pub tags: &'static [&'static str],
}

pub struct Runner {
    registry: SolverRegistry,
    inputs: InputDir,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Runner {
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputDir::new(config.input_dir.clone()),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering from registry metadata, in
    /// chronological order
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
                tags: info.tags,
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Run every work item in order, handing each part's result to
    /// `on_result` as soon as it is available
    pub fn run(&self, mut on_result: impl FnMut(&PartResult)) -> Vec<PartResult> {
        let mut results = Vec::new();
        for work in self.collect_work_items() {
            for result in self.run_item(&work) {
                on_result(&result);
                results.push(result);
            }
        }
        results
    }

    fn run_item(&self, work: &WorkItem) -> Vec<PartResult> {
        let input = match self.inputs.load(work.year, work.day) {
            Ok(input) => input,
            Err(e) => {
                warn!(year = work.year, day = work.day, "{e}");
                return failed_parts(work, RunError::from(e));
            }
        };

        let mut solver = match self.registry.create_solver(work.year, work.day, &input) {
            Ok(solver) => solver,
            Err(e) => return failed_parts(work, RunError::from(e)),
        };

        let mut parse_duration = Some(solver.parse_duration());
        work.parts
            .clone()
            .map(|part| {
                let result = solve_part(work, part, &mut *solver, parse_duration.take());
                if let Ok(answer) = &result.answer {
                    info!(year = work.year, day = work.day, part, %answer, "solved");
                }
                result
            })
            .collect()
    }
}

fn solve_part(
    work: &WorkItem,
    part: u8,
    solver: &mut dyn DynSolver,
    parse_duration: Option<TimeDelta>,
) -> PartResult {
    let (answer, solve_duration) = match solver.solve(part) {
        Ok(result) => {
            let duration = result.duration();
            (Ok(result.answer), duration)
        }
        Err(e) => (
            Err(Arc::new(RunError::from(SolverError::from(e)))),
            TimeDelta::zero(),
        ),
    };

    PartResult {
        year: work.year,
        day: work.day,
        part,
        answer,
        parse_duration,
        solve_duration,
    }
}

fn failed_parts(work: &WorkItem, error: RunError) -> Vec<PartResult> {
    let error = Arc::new(error);
    work.parts
        .clone()
        .map(|part| PartResult {
            year: work.year,
            day: work.day,
            part,
            answer: Err(Arc::clone(&error)),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        })
        .collect()
}
