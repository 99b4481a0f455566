//! Wall-clock split timer.
//!
//! [`SplitTimer`] records elapsed time since construction and since the
//! previous split, reporting through the tracing sink. It is an ad hoc
//! instrumentation utility: the recurrence never consults it.

use std::time::{Duration, Instant};

use tracing::info;

/// A labelled stopwatch with split support.
///
/// # Examples
///
/// ```rust
/// use cosmo_core::SplitTimer;
///
/// let mut timer = SplitTimer::start("simulation");
/// // ... work ...
/// let split = timer.split();
/// let total = timer.total();
/// assert!(total >= split);
/// ```
#[derive(Debug)]
pub struct SplitTimer {
    label: String,
    started: Instant,
    last_split: Instant,
    splits: u32,
}

impl SplitTimer {
    /// Starts a new timer with the given label.
    pub fn start(label: impl Into<String>) -> Self {
        let now = Instant::now();
        Self {
            label: label.into(),
            started: now,
            last_split: now,
            splits: 0,
        }
    }

    /// Records a split, returning the time elapsed since the previous
    /// split (or since construction for the first split), and logs it.
    pub fn split(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now - self.last_split;
        self.last_split = now;
        self.splits += 1;
        info!(
            "process \"{}\" - split {} time: {:.3}s",
            self.label,
            self.splits,
            elapsed.as_secs_f64()
        );
        elapsed
    }

    /// Returns the total time elapsed since construction.
    #[inline]
    pub fn total(&self) -> Duration {
        self.started.elapsed()
    }

    /// Resets the timer to the current instant, clearing the split count.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.started = now;
        self.last_split = now;
        self.splits = 0;
    }

    /// Returns the timer's label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}
