//! Simulation kernel: configuration, series state, and the recurrence.
//!
//! # Architecture
//!
//! ```text
//! Simulator
//! ├── SimulationConfig  (validated step count, seed, parameter table)
//! ├── SeriesSet         (the nine owned time series)
//! ├── CosmoRng          (seeded random source)
//! └── Operations
//!     ├── run()                   (advance every step in order)
//!     ├── export_series()         ((tau, lambda) pairs)
//!     └── luminosity_distances()  (post-run derived curve)
//! ```

pub mod config;
pub mod error;
mod series;
pub mod simulator;

// Re-exports for convenient access
pub use config::{ModelParams, SimulationConfig, SimulationConfigBuilder};
pub use error::{ConfigError, SimulationError};
pub use simulator::Simulator;
