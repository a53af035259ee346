//! # Tallystats
//!
//! Descriptive statistics for Rust: mean, variance, standard deviation,
//! min, max, median and quantiles over a growing set of samples.
//!
//! ## Features
//!
//! - **Exact statistics**: [`Statistics`] keeps the samples and recomputes
//!   every query from them, using compensated summation
//! - **Constant memory**: [`RunningStats`] tracks the moments with
//!   Welford's algorithm
//! - **No sentinels**: queries on an empty accumulator return `None`
//! - **Mergeable**: both accumulators implement [`Accumulator`](traits::Accumulator),
//!   so partial results can be combined
//!
//! ## Quick Start
//!
//! ```rust
//! use tallystats::prelude::*;
//!
//! let mut stats = Statistics::new();
//! for latency_ms in [12.0, 15.0, 11.0, 40.0, 13.0] {
//!     stats.add(latency_ms);
//! }
//!
//! assert_eq!(stats.median(), Some(13.0));
//! assert_eq!(stats.max(), Some(40.0));
//! println!("{}", stats);
//! ```
//!
//! ## Generic Accumulation
//!
//! ```rust
//! use tallystats::prelude::*;
//!
//! fn spread<A: Moments>(acc: &A) -> Option<f64> {
//!     Some(acc.std_dev()? / acc.mean()?)
//! }
//!
//! let mut exact = Statistics::new();
//! let mut running = RunningStats::new();
//! for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
//!     exact.update(v);
//!     running.update(v);
//! }
//!
//! let a = spread(&exact).unwrap();
//! let b = spread(&running).unwrap();
//! assert!((a - b).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support; without it the crate is
//!   `no_std` + `alloc` and uses libm
//! - `serde`: Enable serialization. In human-readable formats such as JSON,
//!   NaN and infinities are written as the strings `"NaN"`, `"inf"` and
//!   `"-inf"` so they survive a round trip

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod traits;

pub mod statistics;

mod math;

#[cfg(feature = "serde")]
mod serde_float;

pub mod prelude {
    pub use crate::statistics::{RunningStats, Statistics, Summary};
    pub use crate::traits::*;
}

pub use statistics::{RunningStats, Statistics, Summary};
