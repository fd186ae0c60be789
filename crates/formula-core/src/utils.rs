//! Sorting and order-statistic helpers

use crate::numeric::Numeric;
use ordered_float::OrderedFloat;

/// Copy a sample into a new ascending `Vec<f64>`
///
/// NaN sorts after every other value.
pub fn sorted<T: Numeric>(data: &[T]) -> Vec<f64> {
    let mut values = crate::numeric::to_floats(data);
    values.sort_unstable_by_key(|&x| OrderedFloat(x));
    values
}

/// Median of an already sorted slice
///
/// Returns `None` for an empty slice.
pub fn median_of_sorted(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    if n % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
