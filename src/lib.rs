//! Closed-form descriptive statistics, effect sizes and distributions
//!
//! This facade re-exports the member crates and adds [`describe`], which
//! bundles every descriptive statistic for a sample into one report.
//!
//! | Crate | Contents |
//! |-------|----------|
//! | [`formula_core`] | error type, numeric input trait, mean/median/mode |
//! | [`formula_quantile`] | percentiles, quartiles, five-number summary |
//! | [`formula_spread`] | range, variance, standard deviation, MAD, moments |
//! | [`formula_confidence`] | standard error of the mean, confidence intervals |
//! | [`formula_effect`] | η², ω², Cohen's d/f²/q |
//! | [`formula_distribution`] | uniform distribution |
//!
//! # Example
//!
//! ```rust
//! use formula_stats::{describe, percentile};
//!
//! let sample = [13, 18, 13, 14, 13, 16, 14, 21, 13];
//! let report = describe(&sample, false).unwrap();
//! assert_eq!(report.n, 9);
//! assert_eq!(report.mode, vec![13.0]);
//! assert_eq!(percentile(&sample, 50.0).unwrap(), report.median);
//! ```

mod describe;

pub use formula_confidence;
pub use formula_core;
pub use formula_distribution;
pub use formula_effect;
pub use formula_quantile;
pub use formula_spread;

pub use formula_confidence::*;
pub use formula_core::{max, mean, median, min, mode, Error, Numeric, Result};
pub use formula_distribution::*;
pub use formula_effect::*;
pub use formula_quantile::*;
pub use formula_spread::*;

pub use describe::{describe, Describe};
