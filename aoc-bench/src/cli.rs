//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code 2022 benchmark runner
#[derive(Parser, Debug)]
#[command(name = "aoc-bench", about = "Run and benchmark Advent of Code 2022 solutions", version)]
pub struct Args {
    /// Run a single day
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Precision of timing output; in visual mode, the bar width
    #[arg(short, long)]
    pub precision: Option<u32>,

    /// Benchmark run repetition amount
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub benchmark: Option<u32>,

    /// Only show and run part 1
    #[arg(short = '1', long)]
    pub no_part2: bool,

    /// Only show part 2
    #[arg(short = '2', long)]
    pub no_part1: bool,

    /// Suppress timing
    #[arg(short = 'T', long)]
    pub no_timing: bool,

    /// Suppress answers
    #[arg(short = 'N', long)]
    pub no_answers: bool,

    /// Mask answers
    #[arg(short = 'M', long)]
    pub mask: bool,

    /// Suppress color output
    #[arg(short = 'C', long)]
    pub no_color: bool,

    /// Visual mode: show bars instead of numbers for timing
    #[arg(short, long)]
    pub visual: bool,

    /// Show graphs after the table
    #[arg(short, long)]
    pub graphs: bool,

    /// Width of graphs
    #[arg(short = 'w', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub graph_width: Option<u32>,

    /// Minimal run: execute everything once, print nothing
    #[arg(short, long)]
    pub minimal: bool,

    /// Noisy mode for minimal run: print the elapsed time
    #[arg(short = 'Q', long)]
    pub noisy: bool,

    /// Directory containing day{:02}.txt input files
    #[arg(long, default_value = "input")]
    pub input: PathBuf,
}
