//! Core traits for statistics accumulators
//!
//! Every accumulator implements [`Accumulator`] (feeding, merging, resetting)
//! and [`Moments`] (the descriptive statistics it can answer). Queries return
//! `None` while no samples have been seen.

use core::fmt::Debug;

/// Core trait for all accumulators
pub trait Accumulator: Clone + Debug {
    /// Add a sample
    fn update(&mut self, value: f64);

    /// Fold another accumulator's samples into this one
    fn merge(&mut self, other: &Self);

    /// Reset to the empty state
    fn clear(&mut self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of samples seen
    fn count(&self) -> u64;

    /// Check if no samples have been seen
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Moment-based descriptive statistics
///
/// All methods return `None` on an empty accumulator. NaN samples are not
/// an error: they propagate into the results.
pub trait Moments: Accumulator {
    /// Arithmetic mean
    fn mean(&self) -> Option<f64>;

    /// Population variance (divisor `n`)
    fn variance(&self) -> Option<f64>;

    /// Population standard deviation, `sqrt(variance)`
    fn std_dev(&self) -> Option<f64>;

    /// Smallest sample
    fn min(&self) -> Option<f64>;

    /// Largest sample
    fn max(&self) -> Option<f64>;

    /// Spread between largest and smallest sample
    fn range(&self) -> Option<f64> {
        Some(self.max()? - self.min()?)
    }
}
