//! Solver contract and the type-erased execution boundary

use crate::timing::TimingSample;
use std::fmt::Display;
use std::time::Instant;

/// Capability set every day solver exposes to the harness.
///
/// The harness never inspects the answer types beyond formatting them to
/// text, so a solver is free to return integers, strings, or anything else
/// that implements `Display`. All three operations must be pure with
/// respect to external state and must not panic for well-formed input;
/// behavior on ill-formed input is the solver's own business.
///
/// # Example
///
/// ```
/// use aoc_harness::DaySolver;
///
/// struct Day99;
///
/// impl DaySolver for Day99 {
///     const DAY: u8 = 99;
///     type Parsed<'a> = Vec<u64>;
///     type Part1 = u64;
///     type Part2 = u64;
///
///     fn parse(input: &str) -> Vec<u64> {
///         input.lines().filter_map(|line| line.parse().ok()).collect()
///     }
///
///     fn part1(parsed: &Vec<u64>) -> u64 {
///         parsed.iter().sum()
///     }
///
///     fn part2(parsed: &Vec<u64>, part1: &u64) -> u64 {
///         parsed.iter().max().copied().unwrap_or(0) + part1
///     }
/// }
/// ```
pub trait DaySolver {
    /// Day number used for labels and input lookup (1-25).
    const DAY: u8;

    /// Parsed representation of the raw puzzle input.
    ///
    /// The lifetime allows zero-copy parses that borrow from the input
    /// buffer; owned types simply ignore it.
    type Parsed<'a>;

    /// Answer type for part 1.
    type Part1: Display;

    /// Answer type for part 2.
    type Part2: Display;

    /// Parse the raw input text.
    fn parse(input: &str) -> Self::Parsed<'_>;

    /// Solve part 1 from the parsed input.
    fn part1(parsed: &Self::Parsed<'_>) -> Self::Part1;

    /// Solve part 2 from the parsed input and the part 1 answer.
    fn part2(parsed: &Self::Parsed<'_>, part1: &Self::Part1) -> Self::Part2;
}

/// Which phases run and how many benchmark repetitions each performs.
#[derive(Debug, Clone, Copy)]
pub struct PhasePlan {
    /// Repeat part 1 during benchmarking (part 1 always executes once,
    /// since part 2 consumes its answer).
    pub part1: bool,
    /// Execute part 2 at all.
    pub part2: bool,
    /// Total executions per phase; all but the last are warmup passes
    /// whose results are discarded.
    pub repetitions: u32,
}

impl Default for PhasePlan {
    fn default() -> Self {
        Self {
            part1: true,
            part2: true,
            repetitions: 1,
        }
    }
}

/// Outcome of executing one day: formatted answers plus the averaged
/// per-phase timing sample.
#[derive(Debug, Clone)]
pub struct DayExecution {
    pub part1_answer: String,
    /// `None` when part 2 was suppressed by the plan.
    pub part2_answer: Option<String>,
    pub timing: TimingSample,
}

/// Type-erased boundary between the harness and the heterogeneous solver
/// set.
///
/// The blanket implementation below is the only one: it wraps any
/// [`DaySolver`] and performs the four-timestamp measurement (before
/// parse, after parse, after part 1, after part 2) on a monotonic clock,
/// running the warmup repetitions inside the timed span and dividing the
/// resulting sample by the repetition count.
pub trait DynDay: Sync {
    /// Day number of the underlying solver.
    fn day(&self) -> u8;

    /// Run the phases selected by `plan` against `input`.
    fn execute(&self, input: &str, plan: &PhasePlan) -> DayExecution;
}

impl<S: DaySolver + Sync> DynDay for S {
    fn day(&self) -> u8 {
        S::DAY
    }

    fn execute(&self, input: &str, plan: &PhasePlan) -> DayExecution {
        let repetitions = plan.repetitions.max(1);

        let before_parse = Instant::now();
        for _ in 1..repetitions {
            let _ = S::parse(input);
        }
        let parsed = S::parse(input);
        let after_parse = Instant::now();

        if plan.part1 {
            for _ in 1..repetitions {
                let _ = S::part1(&parsed);
            }
        }
        let part1 = S::part1(&parsed);
        let after_part1 = Instant::now();

        let mut timing = TimingSample {
            parsing: micros_between(before_parse, after_parse),
            part1: micros_between(after_parse, after_part1),
            part2: 0.0,
        };

        let part2_answer = if plan.part2 {
            for _ in 1..repetitions {
                let _ = S::part2(&parsed, &part1);
            }
            let part2 = S::part2(&parsed, &part1);
            let after_part2 = Instant::now();
            timing.part2 = micros_between(after_part1, after_part2);
            Some(part2.to_string())
        } else {
            None
        };

        timing /= repetitions;

        DayExecution {
            part1_answer: part1.to_string(),
            part2_answer,
            timing,
        }
    }
}

/// Elapsed microseconds between two monotonic timestamps.
fn micros_between(start: Instant, stop: Instant) -> f64 {
    stop.duration_since(start).as_secs_f64() * 1_000_000.0
}
