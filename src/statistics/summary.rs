//! Point-in-time snapshot of an exact accumulator

use core::fmt;

/// All descriptive statistics of a non-empty sample set, computed at once
///
/// Produced by [`Statistics::summary`](super::Statistics::summary).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Number of samples
    pub count: u64,
    /// Arithmetic mean
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_float"))]
    pub mean: f64,
    /// Population variance
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_float"))]
    pub variance: f64,
    /// Population standard deviation
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_float"))]
    pub std_dev: f64,
    /// Smallest sample
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_float"))]
    pub min: f64,
    /// Largest sample
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_float"))]
    pub max: f64,
    /// Middle value of the sorted samples
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_float"))]
    pub median: f64,
}

impl Summary {
    /// Spread between largest and smallest sample
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} mean={:.2} sd={:.2} min={:.2} median={:.2} max={:.2}",
            self.count, self.mean, self.std_dev, self.min, self.median, self.max
        )
    }
}
