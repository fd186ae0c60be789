//! Normal-approximation confidence intervals for the mean

use crate::ConfidenceInterval;
use formula_core::{Error, Numeric, Result};
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::{instrument, trace};

/// Standard error of the mean, SEM = s / √n
///
/// Uses the sample standard deviation. Returns `None` for an empty sample.
pub fn standard_error_of_the_mean<T: Numeric>(data: &[T]) -> Option<f64> {
    let s = formula_spread::standard_deviation(data, false)?;
    Some(s / (data.len() as f64).sqrt())
}

/// Two-sided standard normal critical value z for a confidence level
///
/// # Errors
/// [`Error::OutOfBounds`] if `confidence_level` is not in (0, 1).
pub fn critical_value(confidence_level: f64) -> Result<f64> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(Error::OutOfBounds(format!(
            "confidence level {confidence_level} must be in (0, 1)"
        )));
    }

    let normal = Normal::new(0.0, 1.0).map_err(|e| {
        Error::Computation(format!("Failed to create normal distribution: {}", e))
    })?;
    let alpha = 1.0 - confidence_level;
    Ok(normal.inverse_cdf(1.0 - alpha / 2.0))
}

/// Confidence interval for a mean, x̄ ± z · σ / √n
///
/// # Errors
/// - [`Error::BadData`] if `n` is zero
/// - [`Error::OutOfBounds`] if `confidence_level` is not in (0, 1)
///
/// # Examples
/// ```
/// use formula_confidence::confidence_interval;
/// let ci = confidence_interval(10.0, 100, 5.0, 0.95).unwrap();
/// assert!((ci.lower - 9.02).abs() < 1e-2);
/// assert!((ci.upper - 10.98).abs() < 1e-2);
/// ```
#[instrument(level = "trace")]
pub fn confidence_interval(
    mean: f64,
    n: usize,
    sd: f64,
    confidence_level: f64,
) -> Result<ConfidenceInterval> {
    if n == 0 {
        return Err(Error::empty_input("confidence interval"));
    }

    let z = critical_value(confidence_level)?;
    let margin = z * sd / (n as f64).sqrt();
    trace!(z, margin, "computed confidence interval margin");

    Ok(ConfidenceInterval::new(
        mean - margin,
        mean + margin,
        mean,
        confidence_level,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_critical_values() {
        assert_abs_diff_eq!(critical_value(0.95).unwrap(), 1.959964, epsilon = 1e-6);
        assert_abs_diff_eq!(critical_value(0.99).unwrap(), 2.575829, epsilon = 1e-6);
        assert_abs_diff_eq!(critical_value(0.90).unwrap(), 1.644854, epsilon = 1e-6);
    }

    #[test]
    fn test_invalid_confidence_level() {
        for level in [0.0, 1.0, -0.5, 95.0, f64::NAN] {
            assert!(matches!(critical_value(level), Err(Error::OutOfBounds(_))));
            assert!(confidence_interval(0.0, 10, 1.0, level).is_err());
        }
    }

    #[test]
    fn test_confidence_interval() {
        let ci = confidence_interval(90.0, 36, 12.0, 0.95).unwrap();
        // 90 ± 1.96 * 12 / 6
        assert_abs_diff_eq!(ci.lower, 86.08, epsilon = 1e-3);
        assert_abs_diff_eq!(ci.upper, 93.92, epsilon = 1e-3);
        assert_eq!(ci.estimate, 90.0);
        assert_eq!(ci.confidence_level, 0.95);
    }

    #[test]
    fn test_wider_level_gives_wider_interval() {
        let ci95 = confidence_interval(0.0, 25, 3.0, 0.95).unwrap();
        let ci99 = confidence_interval(0.0, 25, 3.0, 0.99).unwrap();
        assert!(ci99.width() > ci95.width());
        assert!(ci99.contains(ci95.lower) && ci99.contains(ci95.upper));
    }

    #[test]
    fn test_zero_sample_size() {
        assert!(matches!(
            confidence_interval(1.0, 0, 1.0, 0.95),
            Err(Error::BadData(_))
        ));
    }

    #[test]
    fn test_standard_error_of_the_mean() {
        // sample sd of [2, 4, 4, 4, 5, 5, 7, 9] is sqrt(32/7)
        let sem = standard_error_of_the_mean(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
        assert_abs_diff_eq!(sem, (32.0_f64 / 7.0).sqrt() / 8f64.sqrt(), epsilon = 1e-12);

        assert_eq!(standard_error_of_the_mean(&[3]), Some(0.0));
        assert_eq!(standard_error_of_the_mean::<f64>(&[]), None);
    }
}
