//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use aoc_solver::{FIRST_YEAR, LAST_YEAR};
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags a solver must all carry to be selected
    pub tags: Vec<String>,
    /// Input directory with `~` expanded
    pub input_dir: PathBuf,
    pub quiet: bool,
    pub list: bool,
    pub verbosity: u8,
}

impl Config {
    /// Build config from CLI args, rejecting years no solver can exist for
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        if let Some(year) = args.year
            && !(FIRST_YEAR..=LAST_YEAR).contains(&year)
        {
            return Err(CliError::Config(format!(
                "year {year} is outside {FIRST_YEAR}..={LAST_YEAR}"
            )));
        }

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir),
            quiet: args.quiet,
            list: args.list,
            verbosity: args.verbose,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str.strip_prefix('~')
        && (rest.is_empty() || rest.starts_with('/'))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest.trim_start_matches('/'));
    }
    path.to_path_buf()
}
