//! Running mean/variance accumulator.
//!
//! [`RunningStats`] tracks the count, the sum and the sum of squares of a
//! stream of samples, from which the sample mean and sample standard
//! deviation are derived on demand. Individual samples are not retained,
//! so the accumulator is O(1) in memory regardless of stream length.
//!
//! This utility is observational only: it is used for post-hoc summaries
//! of derived sequences and never feeds back into the recurrence.

/// Streaming statistics over a sequence of `f64` samples.
///
/// Keeps `(count, Σx, Σx²)` and derives the sample mean and the sample
/// standard deviation (n−1 normalisation) on demand.
///
/// # Examples
///
/// ```rust
/// use cosmo_core::RunningStats;
///
/// let mut stats = RunningStats::new();
/// for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     stats.push(x);
/// }
/// assert_eq!(stats.count(), 8);
/// assert_eq!(stats.mean(), 5.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunningStats {
    /// Number of samples pushed.
    count: u64,
    /// Sum of samples.
    sum: f64,
    /// Sum of squared samples.
    sum_sq: f64,
}

impl RunningStats {
    /// Creates an empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one sample.
    #[inline]
    pub fn push(&mut self, x: f64) {
        self.count += 1;
        self.sum += x;
        self.sum_sq += x * x;
    }

    /// Returns the number of samples pushed so far.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the sample mean, or NaN if no samples have been pushed.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }

    /// Returns the sample standard deviation (n−1 normalisation), or NaN
    /// if fewer than two samples have been pushed.
    pub fn sample_sdev(&self) -> f64 {
        let n = self.count as f64;
        ((n * self.sum_sq - self.sum * self.sum) / (n * (n - 1.0))).sqrt()
    }
}

impl std::fmt::Display for RunningStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n = {}, mean = {:E}, sdev = {:E}",
            self.count,
            self.mean(),
            self.sample_sdev()
        )
    }
}
