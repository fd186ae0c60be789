//! Tukey's five-number summary

use crate::quartiles::quartiles_inclusive;
use formula_core::Numeric;
use serde::Serialize;
use std::fmt;

/// Minimum, lower quartile, median, upper quartile and maximum
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    #[serde(rename = "Q1")]
    pub q1: f64,
    pub median: f64,
    #[serde(rename = "Q3")]
    pub q3: f64,
    pub max: f64,
}

impl fmt::Display for FiveNumberSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min: {}, Q1: {}, median: {}, Q3: {}, max: {}",
            self.min, self.q1, self.median, self.q3, self.max
        )
    }
}

/// Five-number summary using inclusive quartiles
///
/// Returns `None` for an empty sample.
///
/// ```
/// use formula_quantile::five_number_summary;
/// let s = five_number_summary(&[0, 0, 1, 2, 63, 61, 27, 13]).unwrap();
/// assert_eq!((s.min, s.q1, s.median, s.q3, s.max), (0.0, 0.5, 7.5, 44.0, 63.0));
/// ```
pub fn five_number_summary<T: Numeric>(data: &[T]) -> Option<FiveNumberSummary> {
    quartiles_inclusive(data).map(|q| FiveNumberSummary {
        min: q.min,
        q1: q.q1,
        median: q.q2,
        q3: q.q3,
        max: q.max,
    })
}
