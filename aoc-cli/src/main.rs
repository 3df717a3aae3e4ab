//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod inputs;
mod output;
mod runner;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::{SolverRegistry, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use output::OutputFormatter;
use runner::Runner;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    init_logging(config.verbosity)?;

    let registry = build_registry(&config.tags)?;
    let runner = Runner::new(registry, &config);
    let formatter = OutputFormatter::new(config.quiet);

    let work_items = runner.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    if config.list {
        formatter.print_listing(&work_items);
        return Ok(());
    }

    if !config.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }
    let results = runner.run(|result| formatter.print_result(result));
    formatter.print_summary(&results);

    Ok(())
}

/// Log to stderr; `RUST_LOG` takes precedence over `-v`
fn init_logging(verbosity: u8) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(7), "trace");
    }

    #[test]
    fn tag_filter_requires_every_tag() {
        let registry = build_registry(&["grid".to_string(), "dijkstra".to_string()]).unwrap();
        assert!(registry.contains(2023, 17));

        let registry = build_registry(&["grid".to_string(), "no-such-tag".to_string()]).unwrap();
        assert!(registry.is_empty());
    }
}
