//! CLI error type.
//!
//! Every failure mode is unrecoverable for the current run: the binary
//! reports the condition and exits non-zero. No partially computed
//! series is ever written.

use thiserror::Error;

use cosmo_engine::sim::{ConfigError, SimulationError};

/// Top-level error for the `lambdasim` binary.
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid step count or parameter table.
    #[error("invalid argument: {0}")]
    Config(#[from] ConfigError),

    /// The recurrence raised a numerical domain error mid-run.
    #[error("simulation failed: {0}")]
    Simulation(#[from] SimulationError),

    /// The output file could not be written.
    #[error("output failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
