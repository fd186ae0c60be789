//! Common types for confidence intervals

use serde::Serialize;
use std::fmt;

/// A confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    #[serde(rename = "lower_bound")]
    pub lower: f64,
    /// Upper bound of the interval
    #[serde(rename = "upper_bound")]
    pub upper: f64,
    /// The point estimate (center of interval)
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Bounds as a `(lower, upper)` pair
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{}, {}], estimate: {}",
            self.confidence_level * 100.0,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_accessors() {
        let ci = ConfidenceInterval::new(8.0, 12.0, 10.0, 0.95);
        assert_eq!(ci.width(), 4.0);
        assert_eq!(ci.margin_of_error(), 2.0);
        assert_eq!(ci.bounds(), (8.0, 12.0));
        assert!(ci.contains(10.0));
        assert!(ci.contains(8.0));
        assert!(!ci.contains(12.5));
    }

    #[test]
    fn test_display() {
        let ci = ConfidenceInterval::new(8.0, 12.0, 10.0, 0.95);
        assert_eq!(ci.to_string(), "95.0% CI: [8, 12], estimate: 10");
    }
}
