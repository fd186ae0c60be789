//! Confidence intervals for the mean
//!
//! Intervals are built from the normal approximation
//! `x̄ ± z · σ / √n`, where `z` is the two-sided standard normal critical
//! value for the requested level.
//!
//! # Example
//!
//! ```rust
//! use formula_confidence::{confidence_interval, standard_error_of_the_mean};
//!
//! let sample = [13, 18, 13, 14, 13, 16, 14, 21, 13];
//! let sem = standard_error_of_the_mean(&sample).unwrap();
//! assert!(sem > 0.0);
//!
//! let ci = confidence_interval(15.0, sample.len(), 3.0, 0.99).unwrap();
//! assert!(ci.contains(15.0));
//! ```

mod asymptotic;
mod types;

pub use asymptotic::{confidence_interval, critical_value, standard_error_of_the_mean};
pub use types::ConfidenceInterval;
