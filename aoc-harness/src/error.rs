//! Error types for the harness core

use thiserror::Error;

/// Contradictory run configuration, detected before any task executes
///
/// Validation collects every violation, so a single bad invocation reports
/// all of its problems at once through the `Multiple` variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Part 1 and part 2 both suppressed
    #[error("cannot suppress both parts")]
    BothPartsSuppressed,

    /// Precision given while timing display is off
    #[error("cannot specify precision when not timing")]
    PrecisionWithoutTiming,

    /// Benchmark repetitions given while timing display is off
    #[error("cannot benchmark when not timing")]
    BenchmarkWithoutTiming,

    /// Answer masking given while timing display is off
    #[error("cannot mask answers when not timing")]
    MaskWithoutTiming,

    /// Answer masking given while answers are suppressed
    #[error("cannot mask answers when not printing solutions")]
    MaskWithoutAnswers,

    /// Answers and timing both suppressed; the table would be empty
    #[error("cannot suppress answers and timing")]
    NothingToShow,

    /// Graph width given while graph output is disabled
    #[error("cannot specify graph width when graph output is disabled")]
    GraphWidthWithoutGraphs,

    /// Single-day mode combined with graph output
    #[error("cannot run a single day with graph output")]
    SingleWithGraphs,

    /// Single-day mode combined with visual timing bars
    #[error("cannot run a single day with visual timing")]
    SingleWithVisual,

    /// Several violations found in one validation pass
    #[error("{} configuration errors", .0.len())]
    Multiple(Vec<ConfigError>),
}

impl ConfigError {
    /// Flatten into the individual violations for per-line reporting.
    pub fn violations(&self) -> Vec<&ConfigError> {
        match self {
            ConfigError::Multiple(all) => all.iter().collect(),
            single => vec![single],
        }
    }
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Attempted to register two solvers for the same day
    #[error("duplicate solver registration for day {0}")]
    DuplicateDay(u8),
}
