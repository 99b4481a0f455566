//! # cosmo_engine: Stepping Engine for the Fluctuating-Lambda Model
//!
//! ## Engine Layer Role
//!
//! This crate is the kernel of the workspace. It owns:
//! - The seeded random source with the cosine-only Box–Muller transform
//!   (`rng`)
//! - The validated configuration and parameter table (`sim::config`)
//! - The nine-series state and the step recurrence (`sim::simulator`)
//! - The two-column output writer (`output`)
//!
//! ## Model
//!
//! A discrete-time cosmological model: per step, an explicit Euler
//! advance of the scale factor from the current densities, a full-history
//! re-summation of the volume (O(steps²) over a run), a cardinality
//! derived from the volume, an action advancing as a Gaussian random walk
//! scaled by the square root of the cardinality increment, and a
//! cosmological term derived as action over volume. The dimensionful SI
//! variant is implemented; constants live in `cosmo_core::constants`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use cosmo_engine::sim::{SimulationConfig, Simulator};
//!
//! let config = SimulationConfig::builder()
//!     .steps(5)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut simulator = Simulator::new(config).unwrap();
//! simulator.run().unwrap();
//!
//! let pairs = simulator.export_series().unwrap();
//! assert_eq!(pairs.len(), 5);
//!
//! let distances = simulator.luminosity_distances().unwrap();
//! assert_eq!(distances.len(), 5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod output;
pub mod rng;
pub mod sim;

// Re-exports for convenient access
pub use output::write_series;
pub use rng::CosmoRng;
pub use sim::{
    ConfigError, ModelParams, SimulationConfig, SimulationConfigBuilder, SimulationError,
    Simulator,
};
