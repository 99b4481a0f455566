//! Error types for the stepping engine.
//!
//! Configuration errors occur at construction; simulation errors occur
//! while stepping or when derived series are requested too early. Both
//! are unrecoverable for the current run: there is no retry or
//! partial-result policy, and a failed run must not emit a
//! NaN-poisoned series.

use std::fmt;

use thiserror::Error;

/// Configuration error for the simulator.
///
/// These errors occur during construction when invalid parameters are
/// provided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Step count outside the valid range (at least 1 step is required).
    InvalidStepCount(usize),
    /// Invalid parameter value with name and description.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl ConfigError {
    /// Convenience constructor for [`ConfigError::InvalidParameter`].
    pub fn invalid_parameter(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStepCount(count) => {
                write!(f, "Invalid step count {}: at least 1 step is required", count)
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter '{}': {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Runtime error raised while stepping the recurrence or exporting its
/// results.
///
/// Every variant invalidates the run from the failing step onward; the
/// caller must report it and terminate rather than keep stepping.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum SimulationError {
    /// The cardinality decreased between consecutive steps, so the
    /// square root in the action random walk has a negative radicand.
    #[error(
        "non-monotonic cardinality at step {step}: N fell from {previous:E} to {current:E}"
    )]
    NonMonotonicCardinality {
        /// Step index i+1 at which the decrease was detected.
        step: usize,
        /// Cardinality at step i.
        previous: f64,
        /// Cardinality at step i+1.
        current: f64,
    },

    /// The density sum under the Hubble-like square root went negative.
    #[error("negative density sum at step {step}: {sum:E}")]
    NegativeDensitySum {
        /// Step index at which the radicand was evaluated.
        step: usize,
        /// The offending density sum.
        sum: f64,
    },

    /// A derived series was requested before the run completed.
    #[error("derived series requested before the run completed")]
    IncompleteRun,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidStepCount(0);
        assert!(err.to_string().contains("Invalid step count 0"));

        let err = ConfigError::invalid_parameter("growth_rate", "must exceed 1");
        assert!(err.to_string().contains("growth_rate"));
    }

    #[test]
    fn test_simulation_error_display() {
        let err = SimulationError::NonMonotonicCardinality {
            step: 7,
            previous: 10.0,
            current: 9.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("step 7"));
        assert!(msg.contains("non-monotonic cardinality"));

        let err = SimulationError::IncompleteRun;
        assert!(err.to_string().contains("before the run completed"));
    }
}
