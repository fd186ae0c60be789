//! Error types for closed-form statistics
//!
//! Provides the error kinds shared by all formula-stats crates. Functions that
//! can only fail because their sample is empty return `Option` instead; the
//! variants here cover inputs that are rejected outright.

use thiserror::Error;

/// Core error type for statistical formulas
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The data cannot be used for the requested operation (e.g. it is empty)
    #[error("Bad data: {0}")]
    BadData(String),

    /// A parameter lies outside its permitted range
    #[error("Out of bounds: {0}")]
    OutOfBounds(String),

    /// A parameter lies outside the mathematical domain of the formula
    #[error("Domain error: {0}")]
    Domain(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::BadData(format!("cannot compute {operation} of an empty sample"))
    }

    /// Create an error for a percentile outside [0, 100]
    pub fn percentile_out_of_bounds(p: f64) -> Self {
        Self::OutOfBounds(format!("percentile {p} must be in [0, 100]"))
    }

    /// Create an error for a probability outside [0, 1]
    pub fn probability_out_of_bounds(p: f64) -> Self {
        Self::OutOfBounds(format!("probability {p} must be in [0, 1]"))
    }

    /// Create an error for negative degrees of freedom
    pub fn negative_degrees_of_freedom(df: i64) -> Self {
        Self::OutOfBounds(format!("degrees of freedom {df} must be >= 0"))
    }

    /// Create an error for a correlation coefficient outside (-1, 1)
    pub fn correlation_domain(r: f64) -> Self {
        Self::Domain(format!("correlation {r} must be in (-1, 1)"))
    }
}
