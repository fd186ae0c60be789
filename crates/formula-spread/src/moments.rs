//! Higher-order moments: skewness and kurtosis
//!
//! Population forms use the central moments mₖ = Σ(xᵢ − x̄)ᵏ / n:
//!
//! - skewness g₁ = m₃ / m₂^{3/2}
//! - excess kurtosis g₂ = m₄ / m₂² − 3
//!
//! Sample forms apply the usual small-sample adjustments (as reported by SAS,
//! SPSS and Excel's `SKEW`/`KURT`):
//!
//! - G₁ = g₁ · √(n(n − 1)) / (n − 2)
//! - G₂ = ((n + 1) g₂ + 6) (n − 1) / ((n − 2)(n − 3))
//!
//! Each function returns `None` where the statistic is undefined: too few
//! observations, or a sample with no spread.

use formula_core::{mean, Numeric};

/// Second, third and fourth central moments
fn central_moments<T: Numeric>(data: &[T]) -> Option<(f64, f64, f64)> {
    let mu = mean(data)?;
    let n = data.len() as f64;

    let (m2, m3, m4) = data.iter().fold((0.0, 0.0, 0.0), |(m2, m3, m4), &x| {
        let d = x.to_float() - mu;
        let d2 = d * d;
        (m2 + d2, m3 + d2 * d, m4 + d2 * d2)
    });

    if m2 == 0.0 {
        return None;
    }
    Some((m2 / n, m3 / n, m4 / n))
}

/// Population skewness g₁
pub fn population_skewness<T: Numeric>(data: &[T]) -> Option<f64> {
    let (m2, m3, _) = central_moments(data)?;
    Some(m3 / m2.powf(1.5))
}

/// Sample skewness G₁; needs at least three observations
pub fn skewness<T: Numeric>(data: &[T]) -> Option<f64> {
    let n = data.len();
    if n < 3 {
        return None;
    }
    let g1 = population_skewness(data)?;
    let n = n as f64;
    Some(g1 * (n * (n - 1.0)).sqrt() / (n - 2.0))
}

/// Population excess kurtosis g₂
pub fn population_kurtosis<T: Numeric>(data: &[T]) -> Option<f64> {
    let (m2, _, m4) = central_moments(data)?;
    Some(m4 / (m2 * m2) - 3.0)
}

/// Sample excess kurtosis G₂; needs at least four observations
pub fn sample_kurtosis<T: Numeric>(data: &[T]) -> Option<f64> {
    let n = data.len();
    if n < 4 {
        return None;
    }
    let g2 = population_kurtosis(data)?;
    let n = n as f64;
    Some(((n + 1.0) * g2 + 6.0) * (n - 1.0) / ((n - 2.0) * (n - 3.0)))
}

/// Standard error of skewness for a sample of size `n`
///
/// SES = √(6n(n − 1) / ((n − 2)(n + 1)(n + 3))). Needs `n >= 3`.
pub fn standard_error_of_skewness(n: usize) -> Option<f64> {
    if n < 3 {
        return None;
    }
    let n = n as f64;
    Some((6.0 * n * (n - 1.0) / ((n - 2.0) * (n + 1.0) * (n + 3.0))).sqrt())
}

/// Standard error of kurtosis for a sample of size `n`
///
/// SEK = 2 · SES · √((n² − 1) / ((n − 3)(n + 5))). Needs `n >= 4`.
pub fn standard_error_of_kurtosis(n: usize) -> Option<f64> {
    if n < 4 {
        return None;
    }
    let ses = standard_error_of_skewness(n)?;
    let n = n as f64;
    Some(2.0 * ses * ((n * n - 1.0) / ((n - 3.0) * (n + 5.0))).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const DATA: [i32; 9] = [13, 18, 13, 14, 13, 16, 14, 21, 13];

    #[test]
    fn test_symmetric_sample_has_zero_skew() {
        let data = [1, 2, 3, 4, 5];
        assert_abs_diff_eq!(population_skewness(&data).unwrap(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(skewness(&data).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_right_skewed_sample() {
        // m2 = 64/9, m3 = 210/9, so g1 = (210/9) / (8/3)^3 = 630/512
        let g1 = population_skewness(&DATA).unwrap();
        assert_abs_diff_eq!(g1, 630.0 / 512.0, epsilon = 1e-12);
        assert!(skewness(&DATA).unwrap() > g1);
    }

    #[test]
    fn test_uniform_grid_kurtosis() {
        // Discrete uniform on 1..=5: m2 = 2, m4 = 6.8, g2 = 6.8/4 - 3 = -1.3
        let data = [1, 2, 3, 4, 5];
        assert_abs_diff_eq!(population_kurtosis(&data).unwrap(), -1.3, epsilon = 1e-12);
        // G2 = ((6 * -1.3) + 6) * 4 / (3 * 2) = -1.2
        assert_abs_diff_eq!(sample_kurtosis(&data).unwrap(), -1.2, epsilon = 1e-12);
    }

    #[test]
    fn test_undefined_cases() {
        assert_eq!(population_skewness::<f64>(&[]), None);
        assert_eq!(population_skewness(&[3, 3, 3]), None);
        assert_eq!(skewness(&[1, 2]), None);
        assert_eq!(population_kurtosis(&[2.0, 2.0]), None);
        assert_eq!(sample_kurtosis(&[1, 2, 3]), None);
    }

    #[test]
    fn test_standard_errors() {
        assert_eq!(standard_error_of_skewness(2), None);
        assert_eq!(standard_error_of_kurtosis(3), None);

        // n = 9: SES = sqrt(432 / 840)
        let ses = standard_error_of_skewness(9).unwrap();
        assert_abs_diff_eq!(ses, (432.0_f64 / 840.0).sqrt(), epsilon = 1e-12);

        // SEK = 2 * SES * sqrt(80 / 84)
        let sek = standard_error_of_kurtosis(9).unwrap();
        assert_abs_diff_eq!(sek, 2.0 * ses * (80.0_f64 / 84.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_standard_errors_shrink_with_n() {
        let small = standard_error_of_skewness(10).unwrap();
        let large = standard_error_of_skewness(1000).unwrap();
        assert!(large < small);
        assert!(standard_error_of_kurtosis(1000).unwrap() < standard_error_of_kurtosis(10).unwrap());
    }
}
