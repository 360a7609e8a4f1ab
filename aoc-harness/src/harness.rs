//! Sequential task runner
//!
//! Iterates the registered days in order, measures each one under the
//! configured phase plan, and produces one report row and one timing
//! sample per day plus a running summary. Strictly single-threaded: no
//! task's timing or output depends on another task's execution.

use crate::options::Options;
use crate::registry::Registry;
use crate::solver::PhasePlan;
use crate::timing::TimingSample;
use std::ops::{Index, IndexMut};

/// Where task inputs come from.
///
/// A `None` return means the input is unavailable; the harness then skips
/// the task silently, leaving its row blank and its sample zero.
pub trait InputSource {
    fn load(&self, day: u8) -> Option<String>;
}

/// Number of display columns in a report row.
pub const COLUMNS: usize = 7;

/// Index of one display column within a report row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Day = 0,
    Part1Answer = 1,
    Part2Answer = 2,
    ParseTime = 3,
    Part1Time = 4,
    Part2Time = 5,
    TotalTime = 6,
}

/// One row of formatted report cells; empty cells render as blank.
#[derive(Debug, Clone, Default)]
pub struct ReportRow([String; COLUMNS]);

impl ReportRow {
    /// All cells in column order.
    pub fn cells(&self) -> &[String; COLUMNS] {
        &self.0
    }
}

impl Index<Column> for ReportRow {
    type Output = String;

    fn index(&self, column: Column) -> &String {
        &self.0[column as usize]
    }
}

impl IndexMut<Column> for ReportRow {
    fn index_mut(&mut self, column: Column) -> &mut String {
        &mut self.0[column as usize]
    }
}

/// Everything one run produces: the element-wise summary, one timing
/// sample per registered day, and one report row per registered day.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub summary: TimingSample,
    pub timings: Vec<TimingSample>,
    pub rows: Vec<ReportRow>,
}

/// Execute every registered day in declared order.
///
/// Options must have passed [`Options::validate`] before this is called.
/// Skipped tasks (single-day filter or missing input) contribute the zero
/// sample and an untouched row; the summary is exactly the element-wise
/// sum of the per-task samples.
pub fn run(options: &Options, registry: &Registry, inputs: &dyn InputSource) -> RunReport {
    let mut timings = vec![TimingSample::default(); registry.len()];
    let mut rows = vec![ReportRow::default(); registry.len()];
    let mut summary = TimingSample::default();

    let plan = PhasePlan {
        part1: options.part1,
        part2: options.part2,
        repetitions: options.benchmark.unwrap_or(1),
    };

    for (index, solver) in registry.iter().enumerate() {
        if options.single.is_some_and(|single| single != index) {
            continue;
        }
        let Some(input) = inputs.load(solver.day()) else {
            continue;
        };

        let execution = solver.execute(&input, &plan);

        let row = &mut rows[index];
        row[Column::Day] = format!("Day {:02}", solver.day());
        if options.answers && options.part1 {
            row[Column::Part1Answer] = options.format_answer(&execution.part1_answer);
        }
        if options.answers
            && let Some(answer) = &execution.part2_answer
        {
            row[Column::Part2Answer] = options.format_answer(answer);
        }
        if options.timing {
            let timing = execution.timing;
            row[Column::ParseTime] = options.format_timing(timing.parsing);
            row[Column::Part1Time] = options.format_timing(timing.part1);
            row[Column::Part2Time] = options.format_timing(timing.part2);
            row[Column::TotalTime] = options.format_timing(timing.total());
        }

        timings[index] = execution.timing;
        summary += execution.timing;
    }

    RunReport {
        summary,
        timings,
        rows,
    }
}
