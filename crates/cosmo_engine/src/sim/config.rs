//! Simulation configuration.
//!
//! This module provides the model-parameter table and the validated
//! configuration a [`Simulator`](super::Simulator) is constructed from.
//! The parameter table follows the dimensionful SI variant of the model:
//! explicit physical constants, with the free length scale `ell` and the
//! time schedule expressed in Planck units.

use cosmo_core::constants::{planck_length, planck_time};

use super::error::ConfigError;

/// Model parameters and initial conditions.
///
/// Scalars set once at construction and immutable thereafter. The
/// defaults are the fixed initial-condition table of the model.
///
/// # Time schedule
///
/// Proper time is non-uniformly spaced: `tau[0] = tau0` and
/// `tau[i] = tau0 + growth_rate^i · deltatau` for i ≥ 1, so step
/// intervals grow geometrically. Early steps are resolved finely and
/// late steps coarsely; downstream arithmetic must never assume a fixed
/// step size.
///
/// # Examples
///
/// ```rust
/// use cosmo_engine::sim::ModelParams;
///
/// let params = ModelParams::default();
/// assert!(params.validate().is_ok());
/// assert_eq!(params.a0, 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelParams {
    /// Initial scale factor a₀.
    pub a0: f64,
    /// Initial proper time τ₀ (s).
    pub tau0: f64,
    /// Base time increment Δτ (s).
    pub deltatau: f64,
    /// Geometric growth rate of the step intervals (must exceed 1).
    pub growth_rate: f64,
    /// Initial volume V₀ (m³·s, the model's four-volume element).
    pub v0: f64,
    /// Initial matter energy density.
    pub rho_mat0: f64,
    /// Initial radiation energy density.
    pub rho_rad0: f64,
    /// Initial cosmological term λ₀.
    pub lambda0: f64,
    /// Free length scale ell converting volume into cardinality (m).
    pub ell: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            a0: 1.0,
            tau0: planck_time(),
            deltatau: 10.0 * planck_time(),
            growth_rate: 1.01,
            v0: 0.0,
            rho_mat0: 0.5,
            rho_rad0: 0.5,
            lambda0: 0.0,
            ell: 3.0 * planck_length(),
        }
    }
}

impl ModelParams {
    /// Validates the parameter table.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` if:
    /// - `a0` or `ell` is not strictly positive
    /// - `deltatau` is not strictly positive
    /// - `growth_rate` does not exceed 1 (the tau schedule would not be
    ///   strictly increasing)
    /// - either initial density or `v0` is negative or non-finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.a0 > 0.0 && self.a0.is_finite()) {
            return Err(ConfigError::invalid_parameter("a0", "must be positive"));
        }
        if !(self.ell > 0.0 && self.ell.is_finite()) {
            return Err(ConfigError::invalid_parameter("ell", "must be positive"));
        }
        if !(self.deltatau > 0.0 && self.deltatau.is_finite()) {
            return Err(ConfigError::invalid_parameter(
                "deltatau",
                "must be positive",
            ));
        }
        if !(self.growth_rate > 1.0 && self.growth_rate.is_finite()) {
            return Err(ConfigError::invalid_parameter(
                "growth_rate",
                "must exceed 1",
            ));
        }
        if !(self.v0 >= 0.0 && self.v0.is_finite()) {
            return Err(ConfigError::invalid_parameter(
                "v0",
                "must be non-negative",
            ));
        }
        if !(self.rho_mat0 >= 0.0 && self.rho_mat0.is_finite()) {
            return Err(ConfigError::invalid_parameter(
                "rho_mat0",
                "must be non-negative",
            ));
        }
        if !(self.rho_rad0 >= 0.0 && self.rho_rad0.is_finite()) {
            return Err(ConfigError::invalid_parameter(
                "rho_rad0",
                "must be non-negative",
            ));
        }
        if !self.lambda0.is_finite() {
            return Err(ConfigError::invalid_parameter("lambda0", "must be finite"));
        }
        Ok(())
    }
}

/// Validated simulation configuration.
///
/// Immutable once built. Use [`SimulationConfigBuilder`] to construct
/// instances.
///
/// # Examples
///
/// ```rust
/// use cosmo_engine::sim::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .steps(1000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.steps(), 1000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Number of steps in the simulation.
    steps: usize,
    /// Optional seed for reproducibility; wall-clock seeding otherwise.
    seed: Option<u64>,
    /// Model parameters and initial conditions.
    params: ModelParams,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the model parameters.
    #[inline]
    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidStepCount` if `steps` is 0, or the
    /// first parameter-table violation found by [`ModelParams::validate`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps == 0 {
            return Err(ConfigError::InvalidStepCount(self.steps));
        }
        self.params.validate()
    }
}

/// Builder for [`SimulationConfig`].
///
/// The step count is mandatory; the seed defaults to wall-clock seeding
/// and the parameter table to the fixed initial-condition defaults.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    steps: Option<usize>,
    seed: Option<u64>,
    params: Option<ModelParams>,
}

impl SimulationConfigBuilder {
    /// Sets the number of steps (must be at least 1).
    #[inline]
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Sets the seed for reproducible runs.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the model parameter table.
    #[inline]
    pub fn params(mut self, params: ModelParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the step count is missing or 0, or if the
    /// parameter table fails validation.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let steps = self.steps.ok_or(ConfigError::invalid_parameter(
            "steps",
            "must be specified",
        ))?;

        let config = SimulationConfig {
            steps,
            seed: self.seed,
            params: self.params.unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_valid() {
        let config = SimulationConfig::builder().steps(100).build().unwrap();
        assert_eq!(config.steps(), 100);
        assert_eq!(config.seed(), None);
        assert_eq!(*config.params(), ModelParams::default());
    }

    #[test]
    fn test_builder_with_seed() {
        let config = SimulationConfig::builder()
            .steps(10)
            .seed(42)
            .build()
            .unwrap();
        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_builder_single_step_is_valid() {
        assert!(SimulationConfig::builder().steps(1).build().is_ok());
    }

    #[test]
    fn test_builder_zero_steps_rejected() {
        let result = SimulationConfig::builder().steps(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidStepCount(0))));
    }

    #[test]
    fn test_builder_missing_steps_rejected() {
        let result = SimulationConfig::builder().build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "steps", .. })
        ));
    }

    #[test]
    fn test_params_negative_density_rejected() {
        let params = ModelParams {
            rho_mat0: -0.5,
            ..ModelParams::default()
        };
        let result = SimulationConfig::builder().steps(10).params(params).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "rho_mat0",
                ..
            })
        ));
    }

    #[test]
    fn test_params_flat_time_schedule_rejected() {
        // growth_rate = 1 would freeze tau after the first step.
        let params = ModelParams {
            growth_rate: 1.0,
            ..ModelParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_params_zero_scale_factor_rejected() {
        let params = ModelParams {
            a0: 0.0,
            ..ModelParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidParameter { name: "a0", .. })
        ));
    }

    #[test]
    fn test_default_table_matches_planck_units() {
        use cosmo_core::constants::{planck_length, planck_time};
        let params = ModelParams::default();
        assert_eq!(params.tau0, planck_time());
        assert_eq!(params.deltatau, 10.0 * planck_time());
        assert_eq!(params.ell, 3.0 * planck_length());
    }
}
