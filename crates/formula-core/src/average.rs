//! Central tendency and extremes
//!
//! These are the location measures the descriptive formulas are built on.
//! All of them return `None` (or an empty `Vec` for [`mode`]) when the sample
//! is empty.

use crate::numeric::Numeric;
use crate::utils::{median_of_sorted, sorted};
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// Arithmetic mean
///
/// # Examples
/// ```
/// use formula_core::mean;
/// assert_eq!(mean(&[1, 2, 3, 4]), Some(2.5));
/// assert_eq!(mean::<f64>(&[]), None);
/// ```
pub fn mean<T: Numeric>(data: &[T]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let sum: f64 = data.iter().map(|&x| x.to_float()).sum();
    Some(sum / data.len() as f64)
}

/// Median (mean of the two middle order statistics for even `n`)
pub fn median<T: Numeric>(data: &[T]) -> Option<f64> {
    median_of_sorted(&sorted(data))
}

/// Every value that occurs with the highest frequency, ascending
///
/// A sample where every value is distinct is multimodal: all values are
/// returned.
pub fn mode<T: Numeric>(data: &[T]) -> Vec<f64> {
    let mut counts: BTreeMap<OrderedFloat<f64>, usize> = BTreeMap::new();
    for &x in data {
        *counts.entry(OrderedFloat(x.to_float())).or_insert(0) += 1;
    }

    let Some(&highest) = counts.values().max() else {
        return Vec::new();
    };

    counts
        .into_iter()
        .filter(|&(_, count)| count == highest)
        .map(|(value, _)| value.into_inner())
        .collect()
}

/// Smallest value
pub fn min<T: Numeric>(data: &[T]) -> Option<f64> {
    data.iter()
        .map(|&x| OrderedFloat(x.to_float()))
        .min()
        .map(OrderedFloat::into_inner)
}

/// Largest value
pub fn max<T: Numeric>(data: &[T]) -> Option<f64> {
    data.iter()
        .map(|&x| OrderedFloat(x.to_float()))
        .max()
        .map(OrderedFloat::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[13, 18, 13, 14, 13, 16, 14, 21, 13]).unwrap(), 15.0);
        assert_relative_eq!(mean(&[-1.5, 1.5]).unwrap(), 0.0);
        assert_eq!(mean::<i32>(&[]), None);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[13, 18, 13, 14, 13, 16, 14, 21, 13]), Some(14.0));
        assert_eq!(median(&[1, 2, 4, 7]), Some(3.0));
        assert_eq!(median::<f64>(&[]), None);
    }

    #[test]
    fn test_mode_single() {
        assert_eq!(mode(&[13, 18, 13, 14, 13, 16, 14, 21, 13]), vec![13.0]);
    }

    #[test]
    fn test_mode_multiple() {
        assert_eq!(mode(&[1, 1, 2, 2, 3]), vec![1.0, 2.0]);
        assert_eq!(mode(&[3.0, 1.0, 2.0]), vec![1.0, 2.0, 3.0]);
        assert!(mode::<f64>(&[]).is_empty());
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min(&[8, 4, 3]), Some(3.0));
        assert_eq!(max(&[8, 4, 3]), Some(8.0));
        assert_eq!(min::<f64>(&[]), None);
        assert_eq!(max::<f64>(&[]), None);
    }
}
