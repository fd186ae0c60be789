//! Order statistics: percentiles, quartiles and five-number summaries
//!
//! # Overview
//!
//! | Function | Empty sample | Invalid parameter |
//! |----------|--------------|-------------------|
//! | [`percentile`] | `Err(BadData)` | `Err(OutOfBounds)` |
//! | [`quartiles_exclusive`], [`quartiles_inclusive`], [`quartiles`] | `None` | falls back to exclusive |
//! | [`interquartile_range`], [`midhinge`], [`five_number_summary`] | `None` | n/a |
//!
//! The difference in empty-sample handling between [`percentile`] and the
//! quartile functions is deliberate and kept stable for callers.
//!
//! # Examples
//!
//! ```rust
//! use formula_quantile::{percentile, quartiles, QuartileMethod};
//!
//! let data = [6, 7, 15, 36, 39, 40, 41, 42, 43, 47, 49];
//!
//! let p90 = percentile(&data, 90.0).unwrap();
//! assert_eq!(p90, 47.0);
//!
//! let q = quartiles(&data, QuartileMethod::Inclusive).unwrap();
//! assert_eq!(q.iqr, 17.0);
//! ```

mod percentile;
mod quartiles;
mod summary;

pub use percentile::percentile;
pub use quartiles::{
    interquartile_range, iqr, midhinge, quartiles, quartiles_exclusive, quartiles_inclusive,
    QuartileMethod, Quartiles,
};
pub use summary::{five_number_summary, FiveNumberSummary};
