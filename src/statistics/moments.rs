//! Running statistics (mean, variance, min, max) in constant memory
//!
//! Uses Welford's numerically stable online algorithm, and Chan et al.'s
//! parallel combination for merging.

use crate::math;
use crate::statistics::Statistics;
use crate::traits::{Accumulator, Moments};

/// Constant-memory statistics accumulator using Welford's algorithm
///
/// Answers the same moment queries as [`Statistics`] without keeping the
/// samples, so it has no median. Results agree with the exact accumulator
/// up to floating-point rounding.
///
/// # Example
///
/// ```
/// use tallystats::statistics::RunningStats;
///
/// let mut stats = RunningStats::new();
/// assert_eq!(stats.mean(), None);
///
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     stats.add(value);
/// }
///
/// assert!((stats.mean().unwrap() - 5.0).abs() < 0.001);
/// assert!((stats.variance().unwrap() - 4.0).abs() < 0.001);
/// assert!((stats.std_dev().unwrap() - 2.0).abs() < 0.001);
/// assert_eq!(stats.min(), Some(2.0));
/// assert_eq!(stats.max(), Some(9.0));
/// ```
///
/// # Distributed Usage
///
/// ```
/// use tallystats::statistics::RunningStats;
/// use tallystats::traits::Accumulator;
///
/// let mut stats1 = RunningStats::new();
/// let mut stats2 = RunningStats::new();
///
/// for v in [1.0, 2.0, 3.0] {
///     stats1.add(v);
/// }
/// for v in [4.0, 5.0, 6.0] {
///     stats2.add(v);
/// }
///
/// stats1.merge(&stats2);
/// assert!((stats1.mean().unwrap() - 3.5).abs() < 0.001);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RunningStats {
    /// Number of values seen
    count: u64,
    /// Running mean
    mean: f64,
    /// Sum of squared differences from mean (M2 in Welford's algorithm)
    m2: f64,
    /// Minimum value
    min: f64,
    /// Maximum value
    max: f64,
}

impl Default for RunningStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningStats {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Add a value
    ///
    /// NaN is accepted and poisons every statistic from then on.
    pub fn add(&mut self, value: f64) {
        self.count += 1;
        self.min = math::nan_min(self.min, value);
        self.max = math::nan_max(self.max, value);

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
    }

    /// Get the number of values
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the mean (average)
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.mean)
        }
    }

    /// Get the population variance
    pub fn variance(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.m2 / self.count as f64)
        }
    }

    /// Get the sample variance (Bessel's correction)
    ///
    /// `None` with fewer than two values.
    pub fn sample_variance(&self) -> Option<f64> {
        if self.count < 2 {
            None
        } else {
            Some(self.m2 / (self.count - 1) as f64)
        }
    }

    /// Get the population standard deviation
    pub fn std_dev(&self) -> Option<f64> {
        self.variance().map(math::sqrt)
    }

    /// Get the sample standard deviation
    pub fn sample_std_dev(&self) -> Option<f64> {
        self.sample_variance().map(math::sqrt)
    }

    /// Get the minimum value
    pub fn min(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.min)
        }
    }

    /// Get the maximum value
    pub fn max(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.max)
        }
    }

    /// Get the range (max - min)
    pub fn range(&self) -> Option<f64> {
        Some(self.max()? - self.min()?)
    }

    /// Get the sum of all values (0.0 when empty)
    pub fn sum(&self) -> f64 {
        self.mean * self.count as f64
    }

    /// Combine with another accumulator
    pub fn merge_stats(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }

        if self.count == 0 {
            *self = other.clone();
            return;
        }

        log::trace!("merging {} values into {}", other.count, self.count);

        let combined_count = self.count + other.count;
        let delta = other.mean - self.mean;

        let combined_mean = self.mean + delta * (other.count as f64 / combined_count as f64);

        let combined_m2 = self.m2
            + other.m2
            + delta * delta * (self.count as f64 * other.count as f64 / combined_count as f64);

        self.count = combined_count;
        self.mean = combined_mean;
        self.m2 = combined_m2;
        self.min = math::nan_min(self.min, other.min);
        self.max = math::nan_max(self.max, other.max);
    }
}

impl From<&Statistics> for RunningStats {
    fn from(stats: &Statistics) -> Self {
        let mut running = Self::new();
        for &value in stats.samples() {
            running.add(value);
        }
        running
    }
}

impl Accumulator for RunningStats {
    fn update(&mut self, value: f64) {
        self.add(value);
    }

    fn merge(&mut self, other: &Self) {
        self.merge_stats(other);
    }

    fn clear(&mut self) {
        log::trace!("clearing running stats over {} values", self.count);
        *self = Self::new();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl Moments for RunningStats {
    fn mean(&self) -> Option<f64> {
        RunningStats::mean(self)
    }

    fn variance(&self) -> Option<f64> {
        RunningStats::variance(self)
    }

    fn std_dev(&self) -> Option<f64> {
        RunningStats::std_dev(self)
    }

    fn min(&self) -> Option<f64> {
        RunningStats::min(self)
    }

    fn max(&self) -> Option<f64> {
        RunningStats::max(self)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RunningStats {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use crate::serde_float::Float;
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("RunningStats", 5)?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field("mean", &Float(self.mean))?;
        state.serialize_field("m2", &Float(self.m2))?;
        state.serialize_field("min", &self.min().map(Float))?;
        state.serialize_field("max", &self.max().map(Float))?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RunningStats {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use crate::serde_float::Float;

        #[derive(serde::Deserialize)]
        struct RunningStatsData {
            count: u64,
            mean: Float,
            m2: Float,
            min: Option<Float>,
            max: Option<Float>,
        }

        let data = RunningStatsData::deserialize(deserializer)?;
        Ok(RunningStats {
            count: data.count,
            mean: data.mean.0,
            m2: data.m2.0,
            min: data.min.map_or(f64::INFINITY, |Float(x)| x),
            max: data.max.map_or(f64::NEG_INFINITY, |Float(x)| x),
        })
    }
}
