//! Quartile maps under the exclusive and inclusive conventions
//!
//! Both conventions split the sorted sample into a lower and an upper half and
//! take the median of each half as Q1 and Q3. They differ only for odd `n`:
//!
//! - **Exclusive**: the median element belongs to neither half, so the
//!   quartiles tend to fall strictly between data points.
//! - **Inclusive**: the median element belongs to both halves.
//!
//! For even `n` the two conventions agree.

use formula_core::utils::{median_of_sorted, sorted};
use formula_core::Numeric;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Quartile computation methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuartileMethod {
    /// Median excluded from both halves for odd `n`
    #[default]
    Exclusive,

    /// Median included in both halves for odd `n`
    Inclusive,
}

impl QuartileMethod {
    /// Get the name of this method
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exclusive => "exclusive",
            Self::Inclusive => "inclusive",
        }
    }

    /// Resolve a method from its name, case-insensitively
    ///
    /// Any unrecognised name resolves to [`QuartileMethod::Exclusive`]; this
    /// never fails.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("inclusive") {
            Self::Inclusive
        } else if name.eq_ignore_ascii_case("exclusive") {
            Self::Exclusive
        } else {
            debug!(method = name, "unrecognised quartile method, using exclusive");
            Self::default()
        }
    }
}

impl FromStr for QuartileMethod {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<&str> for QuartileMethod {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for QuartileMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Quartile map: the extremes, the three quartiles and the IQR
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quartiles {
    /// Smallest value
    #[serde(rename = "0%")]
    pub min: f64,
    /// First quartile
    #[serde(rename = "Q1")]
    pub q1: f64,
    /// Median
    #[serde(rename = "Q2")]
    pub q2: f64,
    /// Third quartile
    #[serde(rename = "Q3")]
    pub q3: f64,
    /// Largest value
    #[serde(rename = "100%")]
    pub max: f64,
    /// Interquartile range, `Q3 − Q1`
    #[serde(rename = "IQR")]
    pub iqr: f64,
}

impl Quartiles {
    /// Build the map from an ascending, non-empty slice
    fn from_sorted(sorted: &[f64], method: QuartileMethod) -> Option<Self> {
        let n = sorted.len();
        let q2 = median_of_sorted(sorted)?;

        let (lower, upper) = if n == 1 {
            (sorted, sorted)
        } else {
            let half = n / 2;
            match method {
                QuartileMethod::Exclusive => (&sorted[..half], &sorted[n - half..]),
                QuartileMethod::Inclusive => {
                    let with_median = n - half;
                    (&sorted[..with_median], &sorted[half..])
                }
            }
        };

        let q1 = median_of_sorted(lower)?;
        let q3 = median_of_sorted(upper)?;

        Some(Self {
            min: sorted[0],
            q1,
            q2,
            q3,
            max: sorted[n - 1],
            iqr: q3 - q1,
        })
    }

    /// Midpoint of Q1 and Q3
    pub fn midhinge(&self) -> f64 {
        (self.q1 + self.q3) / 2.0
    }
}

/// Quartiles with the median excluded from each half
///
/// Returns `None` for an empty sample.
///
/// # Examples
/// ```
/// use formula_quantile::quartiles_exclusive;
/// let q = quartiles_exclusive(&[6, 7, 15, 36, 39, 40, 41, 42, 43, 47, 49]).unwrap();
/// assert_eq!((q.q1, q.q2, q.q3, q.iqr), (15.0, 40.0, 43.0, 28.0));
/// ```
pub fn quartiles_exclusive<T: Numeric>(data: &[T]) -> Option<Quartiles> {
    Quartiles::from_sorted(&sorted(data), QuartileMethod::Exclusive)
}

/// Quartiles with the median included in each half
///
/// Returns `None` for an empty sample.
pub fn quartiles_inclusive<T: Numeric>(data: &[T]) -> Option<Quartiles> {
    Quartiles::from_sorted(&sorted(data), QuartileMethod::Inclusive)
}

/// Quartiles by method
///
/// Accepts a [`QuartileMethod`] or a method name; names that are not
/// recognised fall back to the exclusive method.
///
/// ```
/// use formula_quantile::{quartiles, quartiles_exclusive};
/// let data = [7, 15, 36, 39, 40, 41];
/// assert_eq!(quartiles(&data, "no-such-method"), quartiles_exclusive(&data));
/// ```
pub fn quartiles<T: Numeric>(data: &[T], method: impl Into<QuartileMethod>) -> Option<Quartiles> {
    match method.into() {
        QuartileMethod::Exclusive => quartiles_exclusive(data),
        QuartileMethod::Inclusive => quartiles_inclusive(data),
    }
}

/// Interquartile range of the exclusive quartiles
pub fn interquartile_range<T: Numeric>(data: &[T]) -> Option<f64> {
    quartiles_exclusive(data).map(|q| q.iqr)
}

/// Alias for [`interquartile_range`]
pub fn iqr<T: Numeric>(data: &[T]) -> Option<f64> {
    interquartile_range(data)
}

/// Mean of Q1 and Q3 under the exclusive method
pub fn midhinge<T: Numeric>(data: &[T]) -> Option<f64> {
    quartiles_exclusive(data).map(|q| q.midhinge())
}
