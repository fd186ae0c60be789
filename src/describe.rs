//! Aggregate descriptive report for a sample

use formula_confidence::{confidence_interval, standard_error_of_the_mean, ConfidenceInterval};
use formula_core::{Error, Numeric, Result};
use formula_quantile::{quartiles_exclusive, Quartiles};
use formula_spread as spread;
use serde::Serialize;
use tracing::{debug, instrument};

/// Every descriptive statistic for one sample
///
/// Built by [`describe`]. Serializes with the conventional short keys
/// (`n`, `sd`, `cv`, `ci_95`, …); `mean_mad` and `median_mad` are only
/// present in population mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Describe {
    /// Number of observations
    pub n: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Every value sharing the highest frequency, ascending
    pub mode: Vec<f64>,
    pub range: f64,
    pub midrange: f64,
    /// Population or sample variance, per the mode
    pub variance: f64,
    /// Standard deviation matching `variance`
    pub sd: f64,
    /// Coefficient of variation (sample standard deviation over the mean)
    pub cv: f64,
    /// Mean absolute deviation, population mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_mad: Option<f64>,
    /// Median absolute deviation, population mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median_mad: Option<f64>,
    /// Exclusive quartiles
    pub quartiles: Quartiles,
    pub midhinge: f64,
    /// Skewness; `None` when undefined for the sample
    pub skewness: Option<f64>,
    /// Standard error of skewness; needs three observations
    pub ses: Option<f64>,
    /// Excess kurtosis; `None` when undefined for the sample
    pub kurtosis: Option<f64>,
    /// Standard error of kurtosis; needs four observations
    pub sek: Option<f64>,
    /// Standard error of the mean
    pub sem: f64,
    pub ci_95: ConfidenceInterval,
    pub ci_99: ConfidenceInterval,
}

fn defined(value: Option<f64>, statistic: &str) -> Result<f64> {
    value.ok_or_else(|| Error::Computation(format!("{statistic} undefined for non-empty sample")))
}

/// Describe a sample
///
/// With `population` set, variance, standard deviation, skewness and
/// kurtosis use the population formulas and the two absolute deviations are
/// included. Otherwise the sample formulas are used and the absolute
/// deviations are left out. The standard error of the mean always uses the
/// sample standard deviation; the confidence intervals use `sd`.
///
/// # Errors
/// [`Error::BadData`] for an empty sample.
///
/// # Examples
/// ```
/// use formula_stats::describe;
///
/// let report = describe(&[1, 2, 3, 4, 5], true).unwrap();
/// assert_eq!(report.variance, 2.0);
/// assert!(report.mean_mad.is_some());
/// assert!(describe::<f64>(&[], true).is_err());
/// ```
#[instrument(level = "debug", skip(data), fields(n = data.len()))]
pub fn describe<T: Numeric>(data: &[T], population: bool) -> Result<Describe> {
    if data.is_empty() {
        return Err(Error::empty_input("describe"));
    }
    let n = data.len();

    let mean = defined(formula_core::mean(data), "mean")?;
    let variance = if population {
        spread::population_variance(data)
    } else {
        spread::sample_variance(data)
    };
    let variance = defined(variance, "variance")?;
    let sd = variance.sqrt();

    let quartiles = quartiles_exclusive(data)
        .ok_or_else(|| Error::Computation("quartiles undefined for non-empty sample".into()))?;

    let (skewness, kurtosis, mean_mad, median_mad) = if population {
        (
            spread::population_skewness(data),
            spread::population_kurtosis(data),
            spread::mean_absolute_deviation(data),
            spread::median_absolute_deviation(data),
        )
    } else {
        (spread::skewness(data), spread::sample_kurtosis(data), None, None)
    };

    let report = Describe {
        n,
        min: defined(formula_core::min(data), "min")?,
        max: defined(formula_core::max(data), "max")?,
        mean,
        median: defined(formula_core::median(data), "median")?,
        mode: formula_core::mode(data),
        range: defined(spread::range(data), "range")?,
        midrange: defined(spread::midrange(data), "midrange")?,
        variance,
        sd,
        cv: defined(spread::coefficient_of_variation(data), "coefficient of variation")?,
        mean_mad,
        median_mad,
        midhinge: quartiles.midhinge(),
        quartiles,
        skewness,
        ses: spread::standard_error_of_skewness(n),
        kurtosis,
        sek: spread::standard_error_of_kurtosis(n),
        sem: defined(standard_error_of_the_mean(data), "standard error of the mean")?,
        ci_95: confidence_interval(mean, n, sd, 0.95)?,
        ci_99: confidence_interval(mean, n, sd, 0.99)?,
    };

    debug!(mean = report.mean, sd = report.sd, population, "described sample");
    Ok(report)
}
