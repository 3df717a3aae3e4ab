//! CLI argument parsing using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding puzzle inputs named `{year}_day{dd}.txt`
    #[arg(long, default_value = "~/.cache/aoc_solver")]
    pub input_dir: PathBuf,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// List matching solvers instead of running them
    #[arg(long)]
    pub list: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["aoc"]).unwrap();
        assert_eq!(args.year, None);
        assert!(args.tags.is_empty());
        assert_eq!(args.input_dir, PathBuf::from("~/.cache/aoc_solver"));
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet && !args.list);
    }

    #[test]
    fn filters_and_verbosity() {
        let args = Args::try_parse_from([
            "aoc", "-y", "2023", "-d", "17", "-p", "2", "--tags", "grid,dijkstra", "-vv",
        ])
        .unwrap();
        assert_eq!((args.year, args.day, args.part), (Some(2023), Some(17), Some(2)));
        assert_eq!(args.tags, vec!["grid", "dijkstra"]);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn rejects_out_of_range_day_and_part() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
    }
}
