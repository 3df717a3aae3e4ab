//! Output formatting for solver results

use crate::runner::{PartResult, WorkItem};
use chrono::TimeDelta;
use itertools::Itertools;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &PartResult) {
        match &result.answer {
            Ok(answer) if self.quiet => println!("{}", answer),
            Ok(_) => println!("{}", format_result(result)),
            Err(e) if self.quiet => eprintln!("Error: {}", e),
            Err(e) => eprintln!("{}: Error - {}", prefix(result), e),
        }
    }

    /// One line per selected solver: puzzle, parts and tags
    pub fn print_listing(&self, items: &[WorkItem]) {
        for item in items {
            println!("{}", format_listing(item));
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[PartResult]) {
        if self.quiet {
            return;
        }

        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = results.len() - successes;

        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", successes, failures);
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

fn prefix(result: &PartResult) -> String {
    format!("{}/{:02} Part {}", result.year, result.day, result.part)
}

/// `YYYY/DD Part P: answer (parse: .., solve: ..)`, omitting the parse time
/// on later parts
fn format_result(result: &PartResult) -> String {
    let answer = result.answer.as_deref().unwrap_or("?");
    let parse_timing = result
        .parse_duration
        .map(|d| format!("parse: {}, ", format_duration(d)))
        .unwrap_or_default();

    format!(
        "{}: {} ({}solve: {})",
        prefix(result),
        answer,
        parse_timing,
        format_duration(result.solve_duration)
    )
}

fn format_listing(item: &WorkItem) -> String {
    let parts = item.parts.clone().join(",");
    if item.tags.is_empty() {
        format!("{}/{:02} parts {}", item.year, item.day, parts)
    } else {
        format!(
            "{}/{:02} parts {} [{}]",
            item.year,
            item.day,
            parts,
            item.tags.iter().join(", ")
        )
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    TimeDelta::from_std(d).map_or_else(|_| "N/A".to_string(), format_duration)
}
