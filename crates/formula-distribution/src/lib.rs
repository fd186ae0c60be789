//! Continuous probability distributions
//!
//! | Distribution | Parameters | Mean | Variance |
//! |---|---|---|---|
//! | [`Uniform`] | a, b | (a+b)/2 | (b−a)²/12 |
//!
//! Distributions are immutable values validated at construction and share
//! the [`ContinuousDistribution`] interface.
//!
//! ```rust
//! use formula_distribution::{ContinuousDistribution, Uniform};
//!
//! let u = Uniform::new(1.0, 4.0).unwrap();
//! assert!((u.cdf(3.4) - 0.8).abs() < 1e-12);
//! assert_eq!(u.pdf(5.0), 0.0);
//! ```

mod traits;
mod uniform;

pub use traits::ContinuousDistribution;
pub use uniform::Uniform;
