//! Dispersion measures for descriptive statistics
//!
//! This crate provides the classical (non-robust) spread estimators:
//! - Range and midrange
//! - Variance with configurable degrees of freedom, population and sample forms
//! - Standard deviation and coefficient of variation
//! - Mean and median absolute deviation
//! - Skewness, kurtosis and their standard errors
//!
//! # Empty samples
//!
//! Every measure here returns `None` for an empty sample instead of an error.
//! The only hard error is [`variance`] with invalid degrees of freedom.
//!
//! | Measure | Divisor | Single observation |
//! |---------|---------|--------------------|
//! | [`population_variance`] | n | 0 |
//! | [`sample_variance`] | n − 1 | 0 |
//! | [`variance`] | n − df | error unless df = 0 |
//!
//! [`sample_variance`] treats a single observation as having no spread, while
//! `variance(&[x], 1)` has a zero divisor and is an error.
//!
//! # Examples
//!
//! ```rust
//! use formula_spread::{range, sample_variance, standard_deviation};
//!
//! let sample = [8, 9, 10, 11, 12];
//! assert_eq!(range(&sample), Some(4.0));
//! assert_eq!(sample_variance(&sample), Some(2.5));
//! assert_eq!(standard_deviation(&sample, true), Some(2f64.sqrt()));
//! ```

mod mad;
mod moments;
mod range;
mod variance;

pub use mad::{mean_absolute_deviation, median_absolute_deviation};
pub use moments::{
    population_kurtosis, population_skewness, sample_kurtosis, skewness,
    standard_error_of_kurtosis, standard_error_of_skewness,
};
pub use range::{midrange, range};
pub use variance::{
    coefficient_of_variation, population_variance, sample_variance, sd, standard_deviation,
    variance,
};
