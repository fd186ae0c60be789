//! Types for effect size representation

use std::fmt;

/// Families of effect size, each with its own conventional thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectSizeType {
    /// Standardized mean difference (Cohen's d)
    StandardizedMeanDifference,
    /// Proportion of variance explained (η², partial η², ω²)
    VarianceExplained,
    /// Cohen's f²
    CohensF,
    /// Difference between Fisher-transformed correlations (Cohen's q)
    CorrelationDifference,
}

impl EffectSizeType {
    /// Get the name of the effect size type
    pub fn name(&self) -> &'static str {
        match self {
            Self::StandardizedMeanDifference => "Standardized Mean Difference",
            Self::VarianceExplained => "Variance Explained",
            Self::CohensF => "Cohen's f²",
            Self::CorrelationDifference => "Correlation Difference",
        }
    }

    /// Get the typical range for this effect size type
    pub fn typical_range(&self) -> (f64, f64) {
        match self {
            Self::StandardizedMeanDifference => (f64::NEG_INFINITY, f64::INFINITY),
            Self::VarianceExplained => (0.0, 1.0),
            Self::CohensF | Self::CorrelationDifference => (0.0, f64::INFINITY),
        }
    }

    /// Small, medium and large thresholds following Cohen's conventions
    pub fn thresholds(&self) -> (f64, f64, f64) {
        match self {
            Self::StandardizedMeanDifference => (0.2, 0.5, 0.8),
            Self::VarianceExplained => (0.01, 0.06, 0.14),
            Self::CohensF => (0.02, 0.15, 0.35),
            Self::CorrelationDifference => (0.1, 0.3, 0.5),
        }
    }
}

/// An effect size measurement with magnitude and interpretation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSize {
    /// The effect size magnitude
    pub magnitude: f64,
    /// The type of effect size
    pub effect_type: EffectSizeType,
    /// Interpretation of the magnitude
    pub interpretation: EffectSizeInterpretation,
}

impl EffectSize {
    /// Create a new effect size
    pub fn new(magnitude: f64, effect_type: EffectSizeType) -> Self {
        let interpretation = EffectSizeInterpretation::from_magnitude(magnitude, effect_type);

        Self {
            magnitude,
            effect_type,
            interpretation,
        }
    }

    /// Get the absolute magnitude
    pub fn abs_magnitude(&self) -> f64 {
        self.magnitude.abs()
    }

    /// Check if the effect size is practically significant
    pub fn is_practically_significant(&self) -> bool {
        matches!(
            self.interpretation,
            EffectSizeInterpretation::Medium | EffectSizeInterpretation::Large
        )
    }
}

impl fmt::Display for EffectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.3} ({})",
            self.effect_type.name(),
            self.magnitude,
            self.interpretation
        )
    }
}

/// Interpretation of effect size magnitude following Cohen's conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EffectSizeInterpretation {
    /// Below the small threshold
    Negligible,
    /// Small effect
    Small,
    /// Medium effect
    Medium,
    /// Large effect
    Large,
}

impl EffectSizeInterpretation {
    /// Get interpretation from magnitude based on effect size type
    pub fn from_magnitude(magnitude: f64, effect_type: EffectSizeType) -> Self {
        let abs_magnitude = magnitude.abs();
        let (small, medium, large) = effect_type.thresholds();

        if abs_magnitude < small {
            Self::Negligible
        } else if abs_magnitude < medium {
            Self::Small
        } else if abs_magnitude < large {
            Self::Medium
        } else {
            Self::Large
        }
    }

    /// Get a description of the interpretation
    pub fn description(&self) -> &'static str {
        match self {
            Self::Negligible => "negligible",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for EffectSizeInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
