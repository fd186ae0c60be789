//! Standardized mean difference and correlation difference
//!
//! Both measures work from summary statistics. Cohen's d standardizes a
//! difference in means by the pooled standard deviation; Cohen's q compares
//! two correlations on the Fisher z scale.

use formula_core::{Error, Result};

/// Cohen's d from group means, standard deviations and sizes
///
/// d = (M₁ − M₂) / s_pooled, with
/// s_pooled = √(((n₁ − 1)s₁² + (n₂ − 1)s₂²) / (n₁ + n₂ − 2))
///
/// The sign follows `mean1 - mean2`. Groups whose pooled degrees of
/// freedom are zero yield a non-finite value.
pub fn cohens_d(mean1: f64, mean2: f64, sd1: f64, sd2: f64, n1: usize, n2: usize) -> f64 {
    let (n1, n2) = (n1 as f64, n2 as f64);
    let pooled = (((n1 - 1.0) * sd1 * sd1 + (n2 - 1.0) * sd2 * sd2) / (n1 + n2 - 2.0)).sqrt();
    (mean1 - mean2) / pooled
}

/// Cohen's q, the distance between two correlations after Fisher's z transform
///
/// q = |atanh(r₁) − atanh(r₂)|
///
/// # Errors
/// [`Error::Domain`] if either correlation lies outside (−1, 1). Both ends
/// are rejected: the transform diverges at r = 1 and at r = −1, so an
/// infinite q is never returned.
pub fn cohens_q(r1: f64, r2: f64) -> Result<f64> {
    for r in [r1, r2] {
        // NaN fails the comparison and is rejected too
        if !(r.abs() < 1.0) {
            return Err(Error::correlation_domain(r));
        }
    }
    Ok((r1.atanh() - r2.atanh()).abs())
}
