//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use crate::output::Verbosity;
use std::path::{Path, PathBuf};

/// Input directory used when neither the flag nor the environment names one
pub const DEFAULT_INPUT_DIR: &str = "~/.cache/aoc_solver";

/// Environment variable overriding the default input directory
pub const INPUT_DIR_ENV: &str = "AOC_INPUT_DIR";

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags a solver must all carry to run
    pub tags: Vec<String>,
    /// Directory holding puzzle inputs, `~` expanded
    pub input_dir: PathBuf,
    /// Explicit input file for the single selected puzzle
    pub input_file: Option<PathBuf>,
    /// Output verbosity
    pub verbosity: Verbosity,
}

impl Config {
    /// Build config from CLI args and the process environment
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        Self::resolve(args, std::env::var(INPUT_DIR_ENV).ok())
    }

    /// Build config with an explicit value for the input directory variable
    fn resolve(args: Args, env_input_dir: Option<String>) -> Result<Self, CliError> {
        if args.input.is_some() && (args.year.is_none() || args.day.is_none()) {
            return Err(CliError::Config(
                "--input requires both --year and --day".to_string(),
            ));
        }

        let input_dir = match (args.input_dir, env_input_dir) {
            (Some(dir), _) => dir,
            (None, Some(dir)) if !dir.is_empty() => PathBuf::from(dir),
            _ => PathBuf::from(DEFAULT_INPUT_DIR),
        };

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&input_dir),
            input_file: args.input.map(|path| expand_tilde(&path)),
            verbosity: Verbosity::from_flags(args.quiet, args.verbose),
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.get(2..).unwrap_or_default());
    }
    path.to_path_buf()
}
