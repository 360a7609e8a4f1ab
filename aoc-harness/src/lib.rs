//! Benchmark harness core for Advent of Code solvers
//!
//! This library holds everything the benchmark runner needs that is not
//! presentation: the solver contract, the plugin registry, the per-phase
//! timing model, the run configuration with its validation rules, and the
//! sequential task runner itself.
//!
//! # Overview
//!
//! - A day solver implements [`DaySolver`] (parse / part1 / part2) and is
//!   registered once with [`register_day!`].
//! - [`Registry::from_plugins`] collects the registered days into a fixed,
//!   day-ordered set.
//! - [`run`] executes every day under a monotonic clock and produces a
//!   [`RunReport`]: one [`TimingSample`] and one [`ReportRow`] per day plus
//!   the element-wise summary.
//!
//! # Quick example
//!
//! ```
//! use aoc_harness::{DaySolver, DynDay, PhasePlan};
//!
//! struct Echo;
//!
//! impl DaySolver for Echo {
//!     const DAY: u8 = 1;
//!     type Parsed<'a> = &'a str;
//!     type Part1 = usize;
//!     type Part2 = usize;
//!
//!     fn parse(input: &str) -> &str {
//!         input.trim()
//!     }
//!
//!     fn part1(parsed: &&str) -> usize {
//!         parsed.len()
//!     }
//!
//!     fn part2(parsed: &&str, part1: &usize) -> usize {
//!         parsed.len() + part1
//!     }
//! }
//!
//! let execution = Echo.execute("hello\n", &PhasePlan::default());
//! assert_eq!(execution.part1_answer, "5");
//! assert_eq!(execution.part2_answer.as_deref(), Some("10"));
//! ```

mod error;
mod harness;
mod options;
mod registry;
mod solver;
mod timing;

pub use error::{ConfigError, RegistrationError};
pub use harness::{COLUMNS, Column, InputSource, ReportRow, RunReport, run};
pub use options::Options;
pub use registry::{DayPlugin, Registry};
pub use solver::{DayExecution, DaySolver, DynDay, PhasePlan};
pub use timing::TimingSample;

// Re-export inventory for use by the registration macro
pub use inventory;
