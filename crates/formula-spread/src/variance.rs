//! Variance, standard deviation and coefficient of variation
//!
//! The general form divides the sum of squared deviations from the mean by
//! `n − df`:
//!
//! - `df = 0`: population variance (σ²)
//! - `df = 1`: sample variance with Bessel's correction (S²)

use formula_core::{mean, Error, Numeric, Result};

/// Sum of squared deviations from the mean, with the sample size
fn sum_of_squares<T: Numeric>(data: &[T]) -> Option<(f64, usize)> {
    let mu = mean(data)?;
    let ss = data
        .iter()
        .map(|&x| {
            let d = x.to_float() - mu;
            d * d
        })
        .sum();
    Some((ss, data.len()))
}

/// Variance with `df` degrees of freedom subtracted from the divisor
///
/// Returns `Ok(None)` for an empty sample.
///
/// # Errors
/// [`Error::OutOfBounds`] if `df` is negative, or if it is not smaller than
/// the sample size (the divisor would be zero or negative). The sign of `df`
/// is checked before anything else.
///
/// This makes `variance(&[x], 1)` an error even though
/// [`sample_variance`] of the same single observation is `Some(0.0)`.
///
/// # Examples
/// ```
/// use formula_spread::variance;
/// assert_eq!(variance(&[8, 9, 10, 11, 12], 0).unwrap(), Some(2.0));
/// assert_eq!(variance(&[8, 9, 10, 11, 12], 1).unwrap(), Some(2.5));
/// assert!(variance(&[1, 2, 3], -1).is_err());
/// ```
pub fn variance<T: Numeric>(data: &[T], df: i64) -> Result<Option<f64>> {
    if df < 0 {
        return Err(Error::negative_degrees_of_freedom(df));
    }
    let Some((ss, n)) = sum_of_squares(data) else {
        return Ok(None);
    };

    let divisor = n as i64 - df;
    if divisor <= 0 {
        return Err(Error::OutOfBounds(format!(
            "degrees of freedom {df} must be less than the sample size {n}"
        )));
    }
    Ok(Some(ss / divisor as f64))
}

/// Population variance, σ² = Σ(xᵢ − μ)² / n
pub fn population_variance<T: Numeric>(data: &[T]) -> Option<f64> {
    sum_of_squares(data).map(|(ss, n)| ss / n as f64)
}

/// Sample variance, S² = Σ(xᵢ − x̄)² / (n − 1)
///
/// A single observation has a sample variance of 0 rather than being
/// undefined.
pub fn sample_variance<T: Numeric>(data: &[T]) -> Option<f64> {
    match sum_of_squares(data)? {
        (_, 1) => Some(0.0),
        (ss, n) => Some(ss / (n - 1) as f64),
    }
}

/// Standard deviation
///
/// Uses the population variance when `population` is set, otherwise the
/// sample variance. Returns `None` for an empty sample.
pub fn standard_deviation<T: Numeric>(data: &[T], population: bool) -> Option<f64> {
    let var = if population {
        population_variance(data)
    } else {
        sample_variance(data)
    };
    var.map(f64::sqrt)
}

/// Alias for [`standard_deviation`]
pub fn sd<T: Numeric>(data: &[T], population: bool) -> Option<f64> {
    standard_deviation(data, population)
}

/// Coefficient of variation, sample standard deviation over the mean
///
/// Returns `None` for an empty sample. A zero mean yields a non-finite value.
pub fn coefficient_of_variation<T: Numeric>(data: &[T]) -> Option<f64> {
    Some(standard_deviation(data, false)? / mean(data)?)
}
