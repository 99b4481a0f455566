//! Physical constants in SI units.
//!
//! The simulator uses the dimensionful variant of the model: explicit
//! physical constants parameterise the recurrence formulas. These are
//! read-only process-wide values fixed before any simulation runs.

use std::f64::consts::PI;

/// Reduced Planck constant ħ (m² kg / s).
pub const HBAR: f64 = 1.05457173e-34;

/// Speed of light c (m / s).
pub const CLIGHT: f64 = 299_792_458.0;

/// Newtonian gravitational constant G (m³ / kg / s²).
pub const GNEWTON: f64 = 6.67384e-11;

/// Combination constant κ = 8πG/c² used to convert an energy density into
/// the squared expansion rate of the Friedmann-like scale-factor step.
pub const KAPPA: f64 = 8.0 * PI * GNEWTON / (CLIGHT * CLIGHT);

/// Planck length l_p = sqrt(8πGħ/c³) (m).
///
/// Not a `const` because `sqrt` is not available in const contexts.
#[inline]
pub fn planck_length() -> f64 {
    (8.0 * PI * GNEWTON * HBAR / CLIGHT.powi(3)).sqrt()
}

/// Planck time t_p = sqrt(8πGħ/c⁵) (s).
#[inline]
pub fn planck_time() -> f64 {
    (8.0 * PI * GNEWTON * HBAR / CLIGHT.powi(5)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_kappa_positive() {
        assert!(KAPPA > 0.0);
        assert!(KAPPA.is_finite());
    }

    #[test]
    fn test_planck_scales_consistent() {
        // l_p = c * t_p by construction.
        assert_relative_eq!(
            planck_length(),
            CLIGHT * planck_time(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_planck_length_magnitude() {
        // The 8π convention gives roughly 8.1e-35 m.
        let lp = planck_length();
        assert!(lp > 1e-35 && lp < 1e-34, "unexpected Planck length: {}", lp);
    }
}
