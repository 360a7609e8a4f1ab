//! aoc-bench - run, time and report Advent of Code 2022 solutions

mod cli;
mod config;
mod error;
mod input;
mod output;

// Import aoc-solutions to link the day plugins
use aoc_solutions as _;

use aoc_harness::{InputSource, PhasePlan, Registry};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use input::FileInputSource;
use std::io::{stdout, IsTerminal, Write};
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Config(error)) => {
            for violation in error.violations() {
                eprintln!("{violation}");
            }
            ExitCode::from(2)
        }
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let registry = Registry::from_plugins()?;
    let config = Config::from_args(args, &registry)?;
    let inputs = FileInputSource::new(config.input_dir.clone());

    if config.minimal {
        minimal_run(&registry, &inputs, config.noisy);
        return Ok(());
    }

    let report = aoc_harness::run(&config.options, &registry, &inputs);

    let use_color = config.options.colorize && stdout().is_terminal();
    let mut out = stdout().lock();
    output::print_report(&mut out, &config.options, &report, use_color)?;
    if config.options.graphs {
        output::graph_output(&mut out, &config.options, &report, use_color)?;
    }
    out.flush()?;
    Ok(())
}

/// Execute every registered day once, untimed and unreported, printing
/// only the total elapsed time when asked.
fn minimal_run(registry: &Registry, inputs: &FileInputSource, noisy: bool) {
    let start = Instant::now();
    let plan = PhasePlan::default();
    for solver in registry.iter() {
        if let Some(input) = inputs.load(solver.day()) {
            let _ = solver.execute(&input, &plan);
        }
    }
    if noisy {
        println!("{:?}", start.elapsed());
    }
}
