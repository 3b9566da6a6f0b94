//! CLI argument parsing using clap

use clap::Parser;
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

    /// Tags to filter solvers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}_day{day:02}.txt` inputs
    /// [default: $AOC_INPUT_DIR or ~/.cache/aoc_solver]
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Read the puzzle input from this file (requires --year and --day)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Quiet mode - only output answers
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_filters() {
        let args = Args::try_parse_from(["aoc", "-y", "2022", "-d", "5", "-t", "schematic,parsing"])
            .unwrap();
        assert_eq!(args.year, Some(2022));
        assert_eq!(args.day, Some(5));
        assert_eq!(args.tags, vec!["schematic", "parsing"]);
        assert!(args.input_dir.is_none());
    }

    #[test]
    fn test_day_out_of_range() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["aoc", "-q", "-v"]).is_err());
    }
}
