//! Common interface for continuous distributions

use formula_core::Result;

/// A continuous probability distribution with closed-form functions
pub trait ContinuousDistribution {
    /// Probability density at `x`
    fn pdf(&self, x: f64) -> f64;

    /// Cumulative probability P(X ≤ x)
    fn cdf(&self, x: f64) -> f64;

    /// Quantile function, the `x` with `cdf(x) = p`
    ///
    /// # Errors
    /// [`formula_core::Error::OutOfBounds`] if `p` is not in [0, 1].
    fn inverse_cdf(&self, p: f64) -> Result<f64>;

    /// Expected value
    fn mean(&self) -> f64;

    /// Variance
    fn variance(&self) -> f64;

    /// Standard deviation
    fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Median, the 0.5 quantile
    fn median(&self) -> f64;
}
