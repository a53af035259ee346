//! Exact descriptive statistics over a retained sample set
//!
//! Every query is recomputed from the stored samples, so results never
//! drift with insertion history. Mean and variance use compensated
//! summation; median and quantiles sort a copy of the samples.

use core::fmt;

use crate::math;
use crate::statistics::Summary;
use crate::traits::{Accumulator, Moments};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Sample-retaining statistics accumulator
///
/// Keeps every sample in insertion order and answers mean, variance,
/// standard deviation, min, max, median and arbitrary quantiles on demand.
/// Every query returns `None` until the first sample arrives.
///
/// # Example
///
/// ```
/// use tallystats::statistics::Statistics;
///
/// let mut stats = Statistics::new();
/// assert_eq!(stats.mean(), None);
///
/// for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
///     stats.add(value);
/// }
///
/// assert!((stats.mean().unwrap() - 3.0).abs() < 1e-12);
/// assert!((stats.variance().unwrap() - 2.0).abs() < 1e-12);
/// assert_eq!(stats.min(), Some(1.0));
/// assert_eq!(stats.max(), Some(5.0));
/// assert_eq!(stats.median(), Some(3.0));
/// ```
///
/// # NaN and infinity
///
/// Samples are never rejected. Mean and variance follow IEEE-754
/// arithmetic; `min`, `max`, `median` and `quantile` return `Some(NaN)`
/// as soon as any sample is NaN.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Statistics {
    samples: Vec<f64>,
}

impl Statistics {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Create an empty accumulator with room for `capacity` samples
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Append a sample
    pub fn add(&mut self, value: f64) {
        self.samples.push(value);
    }

    /// Append every value of an iterator, in order
    pub fn add_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = f64>,
    {
        self.samples.extend(values);
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if no samples have been added
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The samples in insertion order
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Drop every sample
    pub fn clear(&mut self) {
        log::trace!("clearing {} samples", self.samples.len());
        self.samples.clear();
    }

    /// Sum of all samples (0.0 when empty)
    pub fn sum(&self) -> f64 {
        math::compensated_sum(self.samples.iter().copied())
    }

    /// Arithmetic mean
    pub fn mean(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.sum() / self.samples.len() as f64)
    }

    /// Population variance: `sum((x - mean)^2) / n`
    ///
    /// Use `sample_variance()` if the samples are drawn from a larger
    /// population.
    pub fn variance(&self) -> Option<f64> {
        let mean = self.mean()?;
        Some(self.squared_deviations(mean) / self.samples.len() as f64)
    }

    /// Sample variance with Bessel's correction (divisor `n - 1`)
    ///
    /// `None` with fewer than two samples.
    pub fn sample_variance(&self) -> Option<f64> {
        if self.samples.len() < 2 {
            return None;
        }
        let mean = self.mean()?;
        Some(self.squared_deviations(mean) / (self.samples.len() - 1) as f64)
    }

    /// Population standard deviation, `sqrt(variance)`
    pub fn std_dev(&self) -> Option<f64> {
        self.variance().map(math::sqrt)
    }

    /// Sample standard deviation, `sqrt(sample_variance)`
    pub fn sample_std_dev(&self) -> Option<f64> {
        self.sample_variance().map(math::sqrt)
    }

    /// Smallest sample
    pub fn min(&self) -> Option<f64> {
        self.samples.iter().copied().reduce(math::nan_min)
    }

    /// Largest sample
    pub fn max(&self) -> Option<f64> {
        self.samples.iter().copied().reduce(math::nan_max)
    }

    /// Spread between largest and smallest sample
    pub fn range(&self) -> Option<f64> {
        Some(self.max()? - self.min()?)
    }

    /// Middle value of the sorted samples
    ///
    /// For an even count this is the average of the two middle values.
    /// The stored samples keep their insertion order.
    pub fn median(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        let Some(sorted) = self.sorted() else {
            return Some(f64::NAN);
        };
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            Some(math::midpoint(sorted[mid - 1], sorted[mid]))
        } else {
            Some(sorted[mid])
        }
    }

    /// Value at `rank` (0.0 to 1.0), interpolating linearly between the
    /// neighbouring order statistics
    ///
    /// `rank = 0.0` is the minimum, `1.0` the maximum and `0.5` the median.
    /// Returns `None` if empty or if `rank` is outside `[0, 1]`.
    pub fn quantile(&self, rank: f64) -> Option<f64> {
        if self.samples.is_empty() || !(0.0..=1.0).contains(&rank) {
            return None;
        }
        let Some(sorted) = self.sorted() else {
            return Some(f64::NAN);
        };
        let h = (sorted.len() - 1) as f64 * rank;
        let lo = h as usize;
        let frac = h - lo as f64;
        if frac == 0.0 {
            return Some(sorted[lo]);
        }
        let hi = (lo + 1).min(sorted.len() - 1);
        Some(math::lerp(sorted[lo], sorted[hi], frac))
    }

    /// Every statistic at once, or `None` if empty
    pub fn summary(&self) -> Option<Summary> {
        Some(Summary {
            count: self.samples.len() as u64,
            mean: self.mean()?,
            variance: self.variance()?,
            std_dev: self.std_dev()?,
            min: self.min()?,
            max: self.max()?,
            median: self.median()?,
        })
    }

    /// Append every sample of `other`
    pub fn merge_samples(&mut self, other: &Self) {
        log::trace!(
            "merging {} samples into {}",
            other.samples.len(),
            self.samples.len()
        );
        self.samples.extend_from_slice(&other.samples);
    }

    fn squared_deviations(&self, mean: f64) -> f64 {
        math::compensated_sum(self.samples.iter().map(|&x| (x - mean) * (x - mean)))
    }

    /// Ascending copy of the samples, `None` if any sample is NaN
    fn sorted(&self) -> Option<Vec<f64>> {
        if self.samples.iter().any(|x| x.is_nan()) {
            return None;
        }
        let mut sorted = self.samples.clone();
        sorted.sort_unstable_by(f64::total_cmp);
        Some(sorted)
    }
}

impl Accumulator for Statistics {
    fn update(&mut self, value: f64) {
        self.add(value);
    }

    fn merge(&mut self, other: &Self) {
        self.merge_samples(other);
    }

    fn clear(&mut self) {
        Statistics::clear(self);
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.samples.capacity() * core::mem::size_of::<f64>()
    }

    fn count(&self) -> u64 {
        self.samples.len() as u64
    }
}

impl Moments for Statistics {
    fn mean(&self) -> Option<f64> {
        Statistics::mean(self)
    }

    fn variance(&self) -> Option<f64> {
        Statistics::variance(self)
    }

    fn std_dev(&self) -> Option<f64> {
        Statistics::std_dev(self)
    }

    fn min(&self) -> Option<f64> {
        Statistics::min(self)
    }

    fn max(&self) -> Option<f64> {
        Statistics::max(self)
    }
}

impl Extend<f64> for Statistics {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        self.add_all(iter);
    }
}

impl FromIterator<f64> for Statistics {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<f64>> for Statistics {
    fn from(samples: Vec<f64>) -> Self {
        Self { samples }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.mean(), self.std_dev()) {
            (Some(mean), Some(std_dev)) => write!(
                f,
                "Statistics: {} samples, Mean: {:.2}, StdDev: {:.2}",
                self.samples.len(),
                mean,
                std_dev
            ),
            _ => write!(f, "Statistics: No samples"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Statistics {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Statistics", 1)?;
        state.serialize_field("samples", &crate::serde_float::FloatSlice(&self.samples))?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Statistics {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use crate::serde_float::Float;

        #[derive(serde::Deserialize)]
        struct StatisticsData {
            samples: Vec<Float>,
        }

        let data = StatisticsData::deserialize(deserializer)?;
        Ok(Statistics {
            samples: data.samples.into_iter().map(|Float(x)| x).collect(),
        })
    }
}
