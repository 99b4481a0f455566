//! The stepping engine.
//!
//! This module implements the discrete-time recurrence that advances the
//! nine coupled series of the fluctuating-lambda model. The scale-factor
//! step is an explicit Euler step; the volume is recomputed on every
//! advance by revisiting the entire step history, which makes a full run
//! O(steps²); the action advances as a random walk driven by one fresh
//! Gaussian draw per step.
//!
//! # Sequential dependency
//!
//! `advance(i + 1)` strictly depends on the fully mutated state left by
//! `advance(i)`: every `y[k]` for k ≤ i must have received its step-i
//! increment before step i+1 reads it. Steps cannot be reordered or
//! parallelised without restructuring the volume recurrence into an
//! explicit prefix-sum form.

use cosmo_core::constants::{CLIGHT, HBAR, KAPPA};
use std::f64::consts::PI;

use tracing::debug;

use super::config::{ModelParams, SimulationConfig};
use super::error::{ConfigError, SimulationError};
use super::series::SeriesSet;
use crate::rng::CosmoRng;

/// Owns the time-series state and the step recurrence.
///
/// Constructed once per run with a validated [`SimulationConfig`]; all
/// sequences are allocated and seeded at construction; the recurrence
/// mutates only the "current + 1" slot of each series during an advance
/// (plus the cumulative `y` integral, which every advance extends).
///
/// # Examples
///
/// ```rust
/// use cosmo_engine::sim::{SimulationConfig, Simulator};
///
/// let config = SimulationConfig::builder()
///     .steps(8)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut simulator = Simulator::new(config).unwrap();
/// simulator.run().unwrap();
///
/// let pairs = simulator.export_series().unwrap();
/// assert_eq!(pairs.len(), 8);
/// ```
pub struct Simulator {
    /// Model parameters, immutable after construction.
    params: ModelParams,
    /// The nine owned series.
    series: SeriesSet,
    /// The random source feeding the action random walk.
    rng: CosmoRng,
    /// Set once every step has been advanced.
    completed: bool,
}

impl Simulator {
    /// Creates a simulator from the given configuration.
    ///
    /// Allocates the nine sequences at length `steps`, seeds index 0 from
    /// the initial-condition table, fills the proper-time schedule, and
    /// builds the random source (explicit seed or wall clock).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration fails validation
    /// (step count of 0, or an invalid parameter table).
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let steps = config.steps();
        let params = *config.params();
        let mut series = SeriesSet::allocate(steps);

        series.a[0] = params.a0;
        series.tau[0] = params.tau0;
        series.v[0] = params.v0;
        series.n[0] = params.v0 / params.ell.powi(4);
        series.s[0] = 0.0;
        series.lambda[0] = params.lambda0;
        // The scaling laws are relative to a0, so step 0 carries the
        // table densities unscaled.
        series.rho_mat[0] = params.rho_mat0;
        series.rho_rad[0] = params.rho_rad0;

        // Geometric proper-time schedule; index 0 stays at tau0.
        for i in 1..steps {
            series.tau[i] = params.tau0 + params.growth_rate.powi(i as i32) * params.deltatau;
        }

        let rng = match config.seed() {
            Some(seed) => CosmoRng::from_seed(seed),
            None => CosmoRng::from_clock(),
        };

        Ok(Self {
            params,
            series,
            rng,
            completed: false,
        })
    }

    /// Returns the number of steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.series.len()
    }

    /// Returns the seed driving the random source.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Returns whether the run has completed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Advances every step in order, from the initial conditions to the
    /// final slot, logging one progress line per step.
    ///
    /// A completed simulator is left untouched: re-running would feed
    /// further increments into the cumulative `y` integral and corrupt
    /// the series.
    ///
    /// # Errors
    ///
    /// Propagates the first `SimulationError` raised by a step; the run
    /// is invalid from that step onward and no later step executes.
    pub fn run(&mut self) -> Result<(), SimulationError> {
        if self.completed {
            return Ok(());
        }

        self.progress_line(0);
        for i in 0..self.series.len() - 1 {
            self.advance(i)?;
            self.progress_line(i + 1);
        }
        self.completed = true;
        Ok(())
    }

    /// Advances the recurrence from step i to step i+1.
    ///
    /// Must be called with strictly increasing i: each call depends on
    /// the full prefix 0..=i of the scale factor and of the cumulative
    /// specific-volume integral.
    pub(crate) fn advance(&mut self, i: usize) -> Result<(), SimulationError> {
        debug_assert!(i + 1 < self.series.len());
        let dt = self.series.tau[i + 1] - self.series.tau[i];

        // Hubble-like rate from the current densities; explicit Euler
        // step for the scale factor.
        let density_sum = self.series.rho_rad[i] + self.series.rho_mat[i];
        if density_sum < 0.0 {
            return Err(SimulationError::NegativeDensitySum {
                step: i,
                sum: density_sum,
            });
        }
        let rate = (density_sum * KAPPA / 3.0).sqrt();
        self.series.a[i + 1] = self.series.a[i] * (1.0 + rate * dt);

        // Volume over the full history, then cardinality.
        let volume = self.accumulate_volume(i);
        self.series.v[i + 1] = volume;
        self.series.n[i + 1] = volume / self.params.ell.powi(4);

        // One Gaussian quantum per newly resolved cardinality unit. The
        // draw happens before the monotonicity check so the random
        // stream consumes exactly one sample per step regardless.
        let g = self.rng.gaussian();
        let dn = self.series.n[i + 1] - self.series.n[i];
        if dn < 0.0 {
            return Err(SimulationError::NonMonotonicCardinality {
                step: i + 1,
                previous: self.series.n[i],
                current: self.series.n[i + 1],
            });
        }
        self.series.s[i + 1] = self.series.s[i] + g * dn.sqrt() * HBAR;

        self.series.lambda[i + 1] =
            KAPPA * CLIGHT * self.series.s[i + 1] / self.series.v[i + 1];

        // Standard scaling laws relative to the initial scale factor.
        let ratio = self.params.a0 / self.series.a[i + 1];
        self.series.rho_mat[i + 1] = self.params.rho_mat0 * ratio.powi(3);
        self.series.rho_rad[i + 1] = self.params.rho_rad0 * ratio.powi(4);

        Ok(())
    }

    /// Recomputes the volume for step i+1 by re-summing the entire step
    /// history.
    ///
    /// For every k ≤ i the cumulative integral `y[k]` first receives its
    /// step-i increment `(tau[i+1] − tau[i]) / a[i]`, and the updated
    /// value then enters the volume sum for the same outer step; the
    /// increment-before-use ordering is part of the recurrence, not an
    /// implementation detail. Every still-live k is revisited on every
    /// advance, so a full run costs O(steps²).
    fn accumulate_volume(&mut self, i: usize) -> f64 {
        let dy = (self.series.tau[i + 1] - self.series.tau[i]) / self.series.a[i];
        let mut sum = 0.0;
        for k in 0..=i {
            self.series.y[k] += dy;
            let av = self.series.a[k] * self.series.y[k];
            sum += av.powi(3) * (self.series.tau[k + 1] - self.series.tau[k]);
        }
        sum * (4.0 * PI / 3.0) * CLIGHT.powi(4)
    }

    /// Emits the per-step progress line.
    fn progress_line(&self, i: usize) {
        debug!(
            "{}:\t tau = {:E}\t a = {:E}\t rhorad = {:E}\t rhomat = {:E}\t lambda = {:E}",
            i,
            self.series.tau[i],
            self.series.a[i],
            self.series.rho_rad[i],
            self.series.rho_mat[i],
            self.series.lambda[i],
        );
    }

    /// Exports the `(tau, lambda)` pairs in step order.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::IncompleteRun` before [`run`](Self::run)
    /// has completed; a partially computed series is never emitted.
    pub fn export_series(&self) -> Result<Vec<(f64, f64)>, SimulationError> {
        if !self.completed {
            return Err(SimulationError::IncompleteRun);
        }
        Ok(self
            .series
            .tau
            .iter()
            .zip(self.series.lambda.iter())
            .map(|(&tau, &lambda)| (tau, lambda))
            .collect())
    }

    /// Derives the luminosity-distance curve from the final scale factor
    /// and the fully accumulated specific-volume integral:
    /// `out[i] = a[steps−1] · y[i] / a[i]`.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::IncompleteRun` before [`run`](Self::run)
    /// has completed: `y` is only final once every outer step has
    /// contributed its increment to every k.
    pub fn luminosity_distances(&self) -> Result<Vec<f64>, SimulationError> {
        if !self.completed {
            return Err(SimulationError::IncompleteRun);
        }
        let a_final = self.series.a[self.series.len() - 1];
        Ok(self
            .series
            .a
            .iter()
            .zip(self.series.y.iter())
            .map(|(&a, &y)| a_final * y / a)
            .collect())
    }

    /// Proper-time series.
    #[inline]
    pub fn tau(&self) -> &[f64] {
        &self.series.tau
    }

    /// Cosmological-term series.
    #[inline]
    pub fn lambda(&self) -> &[f64] {
        &self.series.lambda
    }

    /// Scale-factor series.
    #[inline]
    pub fn scale_factor(&self) -> &[f64] {
        &self.series.a
    }

    /// Cardinality series.
    #[inline]
    pub fn cardinality(&self) -> &[f64] {
        &self.series.n
    }

    /// Volume series.
    #[inline]
    pub fn volume(&self) -> &[f64] {
        &self.series.v
    }

    /// Action series.
    #[inline]
    pub fn action(&self) -> &[f64] {
        &self.series.s
    }

    /// Matter-density series.
    #[inline]
    pub fn rho_mat(&self) -> &[f64] {
        &self.series.rho_mat
    }

    /// Radiation-density series.
    #[inline]
    pub fn rho_rad(&self) -> &[f64] {
        &self.series.rho_rad
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn simulator(steps: usize, seed: u64) -> Simulator {
        let config = SimulationConfig::builder()
            .steps(steps)
            .seed(seed)
            .build()
            .unwrap();
        Simulator::new(config).unwrap()
    }

    #[test]
    fn test_initial_conditions() {
        let params = ModelParams::default();
        let sim = simulator(10, 42);

        assert_eq!(sim.scale_factor()[0], params.a0);
        assert_eq!(sim.tau()[0], params.tau0);
        assert_eq!(sim.volume()[0], params.v0);
        assert_eq!(sim.action()[0], 0.0);
        assert_eq!(sim.lambda()[0], params.lambda0);
        assert_eq!(sim.cardinality()[0], params.v0 / params.ell.powi(4));
        assert_eq!(sim.rho_mat()[0], params.rho_mat0);
        assert_eq!(sim.rho_rad()[0], params.rho_rad0);
    }

    #[test]
    fn test_tau_schedule_is_geometric() {
        let params = ModelParams::default();
        let sim = simulator(16, 42);
        let tau = sim.tau();
        assert_eq!(tau[0], params.tau0);
        for i in 1..16 {
            let expected = params.tau0 + params.growth_rate.powi(i as i32) * params.deltatau;
            assert_relative_eq!(tau[i], expected, max_relative = 1e-15);
        }
        // Strictly increasing, non-uniform spacing.
        for i in 1..16 {
            assert!(tau[i] > tau[i - 1]);
        }
        assert!((tau[2] - tau[1]) != (tau[1] - tau[0]));
    }

    #[test]
    fn test_single_step_run_executes_no_recurrence() {
        let params = ModelParams::default();
        let mut sim = simulator(1, 42);
        sim.run().unwrap();
        let pairs = sim.export_series().unwrap();
        assert_eq!(pairs, vec![(params.tau0, params.lambda0)]);
    }

    #[test]
    fn test_export_before_run_is_rejected() {
        let sim = simulator(5, 42);
        assert_eq!(sim.export_series(), Err(SimulationError::IncompleteRun));
        assert_eq!(
            sim.luminosity_distances(),
            Err(SimulationError::IncompleteRun)
        );
    }

    #[test]
    fn test_run_is_idempotent() {
        let mut sim = simulator(6, 42);
        sim.run().unwrap();
        let first = sim.export_series().unwrap();
        sim.run().unwrap();
        assert_eq!(first, sim.export_series().unwrap());
    }

    #[test]
    fn test_volume_and_cardinality_are_non_negative() {
        let mut sim = simulator(32, 42);
        sim.run().unwrap();
        for (&v, &n) in sim.volume().iter().zip(sim.cardinality().iter()) {
            assert!(v >= 0.0);
            assert!(n >= 0.0);
        }
    }

    #[test]
    fn test_cardinality_is_non_decreasing() {
        let mut sim = simulator(64, 42);
        sim.run().unwrap();
        let n = sim.cardinality();
        for i in 1..n.len() {
            assert!(n[i] >= n[i - 1], "N decreased at step {}", i);
        }
    }

    #[test]
    fn test_non_monotonic_cardinality_is_detected() {
        let mut sim = simulator(3, 42);
        // Tamper with the step-0 cardinality so the first advance sees a
        // decrease; the guard must fire instead of producing NaN.
        sim.series.n[0] = 1e300;
        let err = sim.advance(0).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::NonMonotonicCardinality { step: 1, .. }
        ));
        assert!(!sim.action()[1].is_nan());
    }

    #[test]
    fn test_density_scaling_laws_conserved() {
        let params = ModelParams::default();
        let mut sim = simulator(48, 42);
        sim.run().unwrap();

        let a = sim.scale_factor();
        for i in 0..48 {
            assert_relative_eq!(
                sim.rho_mat()[i] * a[i].powi(3),
                params.rho_mat0 * params.a0.powi(3),
                max_relative = 1e-12
            );
            assert_relative_eq!(
                sim.rho_rad()[i] * a[i].powi(4),
                params.rho_rad0 * params.a0.powi(4),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_specific_volume_integral_monotone_per_slot() {
        // y[k] only ever receives positive increments, so after a full
        // run earlier slots have accumulated at least as much as later
        // ones (they have been live longer).
        let mut sim = simulator(24, 42);
        sim.run().unwrap();
        let y = &sim.series.y;
        for k in 1..24 {
            assert!(y[k - 1] >= y[k]);
        }
        assert_eq!(y[23], 0.0);
    }

    #[test]
    fn test_luminosity_distances_shape() {
        let mut sim = simulator(16, 42);
        sim.run().unwrap();
        let d = sim.luminosity_distances().unwrap();
        assert_eq!(d.len(), 16);
        let a_final = sim.scale_factor()[15];
        for (i, &out) in d.iter().enumerate() {
            let expected = a_final * sim.series.y[i] / sim.scale_factor()[i];
            assert_eq!(out, expected);
        }
        // The final slot never accumulates an increment.
        assert_eq!(d[15], 0.0);
    }
}
