//! Descriptive statistics over sample sets
//!
//! [`Statistics`] keeps every sample and answers mean, variance, standard
//! deviation, min, max, median and quantiles exactly. [`RunningStats`]
//! answers the moment queries in constant memory.
//!
//! # Example
//!
//! ```
//! use tallystats::statistics::Statistics;
//!
//! let stats: Statistics = [1.0, 2.0, 3.0, 4.0].into_iter().collect();
//!
//! assert_eq!(stats.median(), Some(2.5));
//! println!("Mean: {:?}", stats.mean());
//! println!("Stddev: {:?}", stats.std_dev());
//! println!("{}", stats);
//! ```

mod moments;
mod samples;
mod summary;

pub use moments::RunningStats;
pub use samples::Statistics;
pub use summary::Summary;
