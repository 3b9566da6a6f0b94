//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;
use inputs::InputStore;
use output::{OutputFormatter, debug, print, warn};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    let verbosity = config.verbosity;

    let registry = build_registry(&config.tags)?;
    debug(
        format!("{} solver(s) registered", registry.storage().len()),
        verbosity,
    );

    let inputs = build_inputs(&config)?;
    let executor = Executor::new(registry, inputs, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        print("No solvers found matching the specified filters.", verbosity);
        return Ok(());
    }

    // Missing inputs still run, each part reports the error
    let missing_inputs = check_missing_inputs(&work_items, executor.inputs());
    if !missing_inputs.is_empty() {
        warn(
            format!("missing {} input file(s):", missing_inputs.len()),
            verbosity,
        );
        for (year, day) in &missing_inputs {
            warn(
                format!("  - {}", executor.inputs().path(*year, *day).display()),
                verbosity,
            );
        }
    }

    print(format!("Running {} solver(s)...", work_items.len()), verbosity);

    let formatter = OutputFormatter::new(verbosity);
    let mut results = Vec::new();
    executor.execute(|result| {
        formatter.print_result(&result);
        results.push(result);
    });
    formatter.print_summary(&results);

    Ok(())
}

/// Input store over the configured directory, plus the explicit `--input` file
fn build_inputs(config: &Config) -> Result<InputStore, error::CliError> {
    debug(
        format!("input directory: {}", config.input_dir.display()),
        config.verbosity,
    );
    let inputs = InputStore::new(config.input_dir.clone());

    let (Some(path), Some(year), Some(day)) =
        (&config.input_file, config.year_filter, config.day_filter)
    else {
        return Ok(inputs);
    };

    let inputs = inputs.with_override(year, day, path.clone());
    // An explicitly named file must exist
    if !inputs.contains(year, day) {
        inputs.get(year, day)?;
    }
    Ok(inputs)
}

/// Check which inputs are missing from the input store
fn check_missing_inputs(work_items: &[executor::WorkItem], inputs: &InputStore) -> Vec<(u16, u8)> {
    work_items
        .iter()
        .filter(|w| !inputs.contains(w.year, w.day))
        .map(|w| (w.year, w.day))
        .collect()
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, error::CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
