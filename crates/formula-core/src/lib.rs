//! Core types for closed-form statistical formulas
//!
//! This crate provides the pieces every other formula-stats crate builds on:
//!
//! - [`Error`] and [`Result`], the closed set of error kinds
//! - [`Numeric`], the trait that lets samples be given as any primitive number
//! - central tendency ([`mean`], [`median`], [`mode`]) and extremes
//!   ([`min`], [`max`])
//! - sorting helpers for order statistics
//!
//! # Example
//!
//! ```rust
//! use formula_core::{mean, median, mode};
//!
//! let data = [13, 18, 13, 14, 13, 16, 14, 21, 13];
//! assert_eq!(mean(&data), Some(15.0));
//! assert_eq!(median(&data), Some(14.0));
//! assert_eq!(mode(&data), vec![13.0]);
//! ```

pub mod average;
pub mod error;
pub mod numeric;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};
pub use numeric::{to_floats, Numeric};

pub use average::{max, mean, median, min, mode};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
