//! Mean and median absolute deviation

use formula_core::utils::{median_of_sorted, sorted};
use formula_core::{mean, Numeric};

/// Mean absolute deviation from the mean, Σ|xᵢ − x̄| / n
///
/// Returns `None` for an empty sample.
pub fn mean_absolute_deviation<T: Numeric>(data: &[T]) -> Option<f64> {
    let mu = mean(data)?;
    let total: f64 = data.iter().map(|&x| (x.to_float() - mu).abs()).sum();
    Some(total / data.len() as f64)
}

/// Median absolute deviation from the median, median(|xᵢ − median|)
///
/// Unscaled: no consistency factor is applied. Returns `None` for an empty
/// sample.
pub fn median_absolute_deviation<T: Numeric>(data: &[T]) -> Option<f64> {
    let values = sorted(data);
    let center = median_of_sorted(&values)?;
    let deviations: Vec<f64> = values.iter().map(|&x| (x - center).abs()).collect();
    median_of_sorted(&sorted(&deviations))
}
