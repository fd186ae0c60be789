//! Effect size formulas from summary statistics
//!
//! Effect sizes quantify the magnitude of a difference or relationship
//! independently of sample size. Every function here is a direct formula
//! over summary inputs (sums of squares, degrees of freedom, means, standard
//! deviations, correlations), so raw data never has to be kept around.
//!
//! # Supported effect sizes
//!
//! ## Variance explained
//! - **Eta-squared (η²)** and **partial eta-squared (η²p)**
//! - **Omega-squared (ω²)**: less biased than eta-squared
//! - **Cohen's f²**: ratio of explained to unexplained variance
//!
//! ## Differences
//! - **Cohen's d**: standardized mean difference with pooled standard deviation
//! - **Cohen's q**: difference between two correlations
//!
//! Any magnitude can be labelled with [`EffectSize`], which applies Cohen's
//! small/medium/large conventions for its family.
//!
//! # Examples
//!
//! ```rust
//! use formula_effect::{cohens_d, cohens_q, EffectSize, EffectSizeInterpretation, EffectSizeType};
//!
//! let d = cohens_d(5.0, 3.0, 2.0, 2.0, 30, 30);
//! let es = EffectSize::new(d, EffectSizeType::StandardizedMeanDifference);
//! assert_eq!(es.interpretation, EffectSizeInterpretation::Large);
//!
//! // correlations of ±1 have no Fisher transform
//! assert!(cohens_q(1.0, 0.3).is_err());
//! ```

mod cohen;
mod types;
mod variance_explained;

pub use cohen::{cohens_d, cohens_q};
pub use types::{EffectSize, EffectSizeInterpretation, EffectSizeType};
pub use variance_explained::{cohens_f, eta_squared, omega_squared, partial_eta_squared};
