//! Run configuration and its validation

use crate::error::ConfigError;

/// Immutable run configuration.
///
/// Parsed once from the command line, validated once with
/// [`Options::validate`] before anything runs, then read-only for the
/// duration of the run.
#[derive(Debug, Clone)]
pub struct Options {
    /// Fixed-point precision of timing output; doubles as bar width in
    /// visual mode.
    pub precision: Option<u32>,
    /// Width of the graph panels.
    pub graph_width: Option<u32>,
    /// Run only the task at this registry index.
    pub single: Option<usize>,
    /// Benchmark repetition count per phase.
    pub benchmark: Option<u32>,

    /// Show timing columns.
    pub timing: bool,
    /// Run and show part 1.
    pub part1: bool,
    /// Run and show part 2.
    pub part2: bool,
    /// Show answer columns.
    pub answers: bool,
    /// Replace answers with a redaction placeholder of equal length.
    pub mask: bool,
    /// Colorize output (still suppressed when stdout is not a terminal).
    pub colorize: bool,
    /// Show per-phase graph panels after the table.
    pub graphs: bool,
    /// Show proportional bars instead of numeric timings.
    pub visual: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            precision: None,
            graph_width: None,
            single: None,
            benchmark: None,
            timing: true,
            part1: true,
            part2: true,
            answers: true,
            mask: false,
            colorize: true,
            graphs: false,
            visual: false,
        }
    }
}

impl Options {
    pub const DEFAULT_PRECISION: u32 = 2;
    pub const DEFAULT_BAR_WIDTH: u32 = 8;
    pub const DEFAULT_GRAPH_WIDTH: u32 = 50;

    /// Effective timing precision.
    pub fn precision(&self) -> usize {
        self.precision.unwrap_or(Self::DEFAULT_PRECISION) as usize
    }

    /// Effective bar width for visual mode (the precision flag, reused).
    pub fn bar_width(&self) -> usize {
        self.precision.unwrap_or(Self::DEFAULT_BAR_WIDTH) as usize
    }

    /// Effective graph panel width.
    pub fn graph_width(&self) -> usize {
        self.graph_width.unwrap_or(Self::DEFAULT_GRAPH_WIDTH) as usize
    }

    /// Format a timing value (microseconds) at the configured precision.
    pub fn format_timing(&self, micros: f64) -> String {
        format!("{:.*}", self.precision(), micros)
    }

    /// Format an answer, masking it when requested.
    ///
    /// The mask keeps the original character length so column widths do
    /// not leak the answer.
    pub fn format_answer(&self, answer: &str) -> String {
        if self.mask {
            "X".repeat(answer.chars().count())
        } else {
            answer.to_owned()
        }
    }

    /// Visibility of the three header groups: day, Solutions, Timing.
    pub fn group_mask(&self) -> [bool; 3] {
        [true, self.answers, self.timing]
    }

    /// Per-column visibility of the seven content columns.
    pub fn content_mask(&self) -> [bool; 7] {
        [
            true,
            self.part1 && self.answers,
            self.part2 && self.answers,
            self.timing,
            self.part1 && self.timing,
            self.part2 && self.timing,
            self.timing,
        ]
    }

    /// Visibility of the five summary-row groups.
    pub fn summary_mask(&self) -> [bool; 5] {
        [true, self.timing, self.timing, self.timing, self.timing]
    }

    /// Reject contradictory flag combinations.
    ///
    /// Runs once before execution; every violation found is reported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut violations = Vec::new();

        if !(self.part1 || self.part2) {
            violations.push(ConfigError::BothPartsSuppressed);
        }
        if !self.timing {
            if self.precision.is_some() {
                violations.push(ConfigError::PrecisionWithoutTiming);
            }
            if self.benchmark.is_some() {
                violations.push(ConfigError::BenchmarkWithoutTiming);
            }
            if self.mask {
                violations.push(ConfigError::MaskWithoutTiming);
            }
        }
        if !self.answers {
            if self.mask {
                violations.push(ConfigError::MaskWithoutAnswers);
            }
            if !self.timing {
                violations.push(ConfigError::NothingToShow);
            }
        }
        if !self.graphs && self.graph_width.is_some() {
            violations.push(ConfigError::GraphWidthWithoutGraphs);
        }
        if self.single.is_some() {
            if self.graphs {
                violations.push(ConfigError::SingleWithGraphs);
            }
            if self.visual {
                violations.push(ConfigError::SingleWithVisual);
            }
        }

        if violations.is_empty() {
            Ok(())
        } else if violations.len() == 1 {
            Err(violations.remove(0))
        } else {
            Err(ConfigError::Multiple(violations))
        }
    }
}
