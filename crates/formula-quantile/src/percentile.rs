//! Linearly interpolated percentiles
//!
//! Uses the C = 1 convention (Hyndman & Fan type 7, the default in numpy and
//! Excel's `PERCENTILE.INC`): the rank of the p-th percentile in a sorted
//! sample of size n is `p/100 · (n − 1)`, and values between two order
//! statistics are interpolated linearly.

use formula_core::utils::sorted;
use formula_core::{Error, Numeric, Result};

/// Compute the p-th percentile of a sample, `p` in `[0, 100]`
///
/// Unlike the dispersion measures this is a hard error on an empty sample.
///
/// # Errors
/// - [`Error::BadData`] if `data` is empty
/// - [`Error::OutOfBounds`] if `p` is outside `[0, 100]` (or NaN)
///
/// # Examples
/// ```
/// use formula_quantile::percentile;
/// assert_eq!(percentile(&[15, 20, 35, 40, 50], 40.0).unwrap(), 29.0);
/// assert_eq!(percentile(&[1, 2, 3, 4], 75.0).unwrap(), 3.25);
/// ```
pub fn percentile<T: Numeric>(data: &[T], p: f64) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::empty_input("percentile"));
    }
    if !(0.0..=100.0).contains(&p) {
        return Err(Error::percentile_out_of_bounds(p));
    }

    Ok(percentile_of_sorted(&sorted(data), p))
}

/// Percentile of a non-empty, ascending slice with `p` already validated
pub(crate) fn percentile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = p / 100.0 * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let fraction = rank - lower as f64;

    if lower + 1 >= n {
        return sorted[n - 1];
    }
    sorted[lower] + fraction * (sorted[lower + 1] - sorted[lower])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_percentile_interpolates() {
        let data = [15, 20, 35, 40, 50];
        assert_abs_diff_eq!(percentile(&data, 40.0).unwrap(), 29.0, epsilon = 1e-9);
        assert_abs_diff_eq!(percentile(&data, 26.0).unwrap(), 20.6, epsilon = 1e-9);
        assert_abs_diff_eq!(percentile(&data, 99.9).unwrap(), 49.96, epsilon = 1e-9);
    }

    #[test]
    fn test_percentile_unsorted_input() {
        let data = [50, 15, 40, 20, 35];
        assert_abs_diff_eq!(percentile(&data, 40.0).unwrap(), 29.0, epsilon = 1e-9);
    }

    #[test]
    fn test_percentile_extremes() {
        let data = [3.0, 6.0, 7.0, 8.0, 8.0, 10.0, 13.0, 15.0, 16.0, 20.0];
        assert_eq!(percentile(&data, 0.0).unwrap(), 3.0);
        assert_eq!(percentile(&data, 100.0).unwrap(), 20.0);
    }

    #[test]
    fn test_percentile_single_element() {
        for p in [0.0, 1.0, 50.5, 99.0, 100.0] {
            assert_eq!(percentile(&[5], p).unwrap(), 5.0);
        }
    }

    #[test]
    fn test_percentile_two_elements() {
        assert_abs_diff_eq!(percentile(&[2, 3], 1.0).unwrap(), 2.01, epsilon = 1e-9);
        assert_abs_diff_eq!(percentile(&[2, 3], 50.5).unwrap(), 2.505, epsilon = 1e-9);
        assert_eq!(percentile(&[2, 3], 100.0).unwrap(), 3.0);
    }

    #[test]
    fn test_percentile_empty_is_bad_data() {
        let err = percentile::<f64>(&[], 5.0).unwrap_err();
        assert!(matches!(err, Error::BadData(_)));
    }

    #[test]
    fn test_percentile_out_of_bounds() {
        assert!(matches!(
            percentile(&[1, 2, 3], -4.0).unwrap_err(),
            Error::OutOfBounds(_)
        ));
        assert!(matches!(
            percentile(&[1, 2, 3], 101.0).unwrap_err(),
            Error::OutOfBounds(_)
        ));
        assert!(matches!(
            percentile(&[1, 2, 3], f64::NAN).unwrap_err(),
            Error::OutOfBounds(_)
        ));
    }

    #[test]
    fn test_empty_checked_before_bounds() {
        // An empty sample is reported as bad data even with an invalid p
        assert!(matches!(
            percentile::<f64>(&[], 150.0).unwrap_err(),
            Error::BadData(_)
        ));
    }
}
