//! Owned time-series state.
//!
//! [`SeriesSet`] holds the nine equal-length sequences the recurrence
//! mutates. All buffers are allocated once at construction, never
//! resized, and exclusively owned by the simulator for its lifetime.

/// The nine time series of the model, indexed `0..steps`.
///
/// Index 0 of every sequence is set from the initial-condition table
/// before any stepping occurs and never modified afterwards. Index i+1
/// is computed strictly from indices ≤ i (and, for the volume, from the
/// full history of the scale factor and the specific-volume integral).
#[derive(Clone, Debug)]
pub(crate) struct SeriesSet {
    /// Scale factor a.
    pub a: Vec<f64>,
    /// Cardinality N (count of discrete volume units).
    pub n: Vec<f64>,
    /// Volume V.
    pub v: Vec<f64>,
    /// Cumulative specific-volume integral y: y[k] accumulates
    /// (tau[i+1] − tau[i]) / a[i] once per outer step for every k ≤ i.
    pub y: Vec<f64>,
    /// Action S (stochastic random walk).
    pub s: Vec<f64>,
    /// Matter energy density.
    pub rho_mat: Vec<f64>,
    /// Radiation energy density.
    pub rho_rad: Vec<f64>,
    /// Cosmological term λ.
    pub lambda: Vec<f64>,
    /// Proper time τ (strictly increasing, geometrically spaced).
    pub tau: Vec<f64>,
}

impl SeriesSet {
    /// Allocates all nine sequences to length `steps`, zero-filled.
    pub fn allocate(steps: usize) -> Self {
        Self {
            a: vec![0.0; steps],
            n: vec![0.0; steps],
            v: vec![0.0; steps],
            y: vec![0.0; steps],
            s: vec![0.0; steps],
            rho_mat: vec![0.0; steps],
            rho_rad: vec![0.0; steps],
            lambda: vec![0.0; steps],
            tau: vec![0.0; steps],
        }
    }

    /// Shared length of the sequences.
    #[inline]
    pub fn len(&self) -> usize {
        self.tau.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_equal_lengths() {
        let series = SeriesSet::allocate(17);
        assert_eq!(series.len(), 17);
        assert_eq!(series.a.len(), 17);
        assert_eq!(series.n.len(), 17);
        assert_eq!(series.v.len(), 17);
        assert_eq!(series.y.len(), 17);
        assert_eq!(series.s.len(), 17);
        assert_eq!(series.rho_mat.len(), 17);
        assert_eq!(series.rho_rad.len(), 17);
        assert_eq!(series.lambda.len(), 17);
    }
}
