//! # cosmo_core: Foundation for the Fluctuating-Lambda Simulator
//!
//! ## Core Layer Role
//!
//! cosmo_core serves as the bottom layer of the workspace, providing:
//! - The physical-constant table in SI units (`constants`)
//! - A wall-clock split timer for ad hoc elapsed-time reporting (`timer`)
//! - A running mean/variance accumulator for post-hoc analysis (`stats`)
//!
//! ## Zero Dependency Principle
//!
//! The core layer has no dependencies on other workspace crates and a
//! minimal external footprint:
//! - tracing: structured reporting from the instrumentation utilities
//!
//! Nothing in this crate participates in the stepping recurrence itself;
//! the timer and statistics utilities are purely observational and never
//! affect the simulated series.
//!
//! ## Usage Examples
//!
//! ```rust
//! use cosmo_core::constants::{CLIGHT, KAPPA};
//! use cosmo_core::stats::RunningStats;
//!
//! let mut stats = RunningStats::new();
//! stats.push(1.0);
//! stats.push(3.0);
//! assert_eq!(stats.mean(), 2.0);
//!
//! // Constants are process-wide, read-only values.
//! assert!(KAPPA > 0.0);
//! assert_eq!(CLIGHT, 299_792_458.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod constants;
pub mod stats;
pub mod timer;

pub use stats::RunningStats;
pub use timer::SplitTimer;
