//! Continuous uniform distribution

use crate::ContinuousDistribution;
use formula_core::{Error, Result};

/// Continuous uniform distribution on `[a, b]`
///
/// - PDF: f(x) = 1/(b − a) for x ∈ [a, b], 0 elsewhere
/// - CDF: F(x) = (x − a)/(b − a), clamped to [0, 1]
/// - Mean and median: (a + b)/2
/// - Variance: (b − a)²/12
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    a: f64,
    b: f64,
}

impl Uniform {
    /// Create a uniform distribution on `[a, b]`
    ///
    /// # Errors
    /// [`Error::OutOfBounds`] if `a >= b`, either bound is not finite, or the
    /// width `b − a` overflows.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        if !a.is_finite() || !b.is_finite() || a >= b || !(b - a).is_finite() {
            return Err(Error::OutOfBounds(format!(
                "uniform bounds must be finite with a < b, got a={a}, b={b}"
            )));
        }
        Ok(Self { a, b })
    }

    /// Lower bound
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Upper bound
    pub fn b(&self) -> f64 {
        self.b
    }

    fn width(&self) -> f64 {
        self.b - self.a
    }
}

impl ContinuousDistribution for Uniform {
    fn pdf(&self, x: f64) -> f64 {
        if x >= self.a && x <= self.b {
            1.0 / self.width()
        } else {
            0.0
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < self.a {
            0.0
        } else if x > self.b {
            1.0
        } else {
            (x - self.a) / self.width()
        }
    }

    fn inverse_cdf(&self, p: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::probability_out_of_bounds(p));
        }
        Ok(self.a + p * self.width())
    }

    fn mean(&self) -> f64 {
        (self.a + self.b) / 2.0
    }

    fn variance(&self) -> f64 {
        let w = self.width();
        w * w / 12.0
    }

    fn median(&self) -> f64 {
        self.mean()
    }
}
