//! CLI error types

use aoc_harness::{ConfigError, RegistrationError};
use thiserror::Error;

/// Everything that can abort a run before or during execution.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error("day {0} is not implemented")]
    DayNotImplemented(u8),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
