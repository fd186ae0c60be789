//! Variance explained effect size measures (eta-squared, omega-squared, Cohen's f²)
//!
//! These take ANOVA summary quantities rather than raw data:
//! sums of squares for the treatment (SSt), error (SSE) and total (SST),
//! treatment degrees of freedom and the error mean square (MSE).

/// Eta-squared (η²), the share of total variance explained by the treatment
///
/// η² = SSt / SST
pub fn eta_squared(ss_treatment: f64, ss_total: f64) -> f64 {
    ss_treatment / ss_total
}

/// Partial eta-squared (η²p)
///
/// η²p = SSt / (SSt + SSE)
pub fn partial_eta_squared(ss_treatment: f64, ss_error: f64) -> f64 {
    ss_treatment / (ss_treatment + ss_error)
}

/// Omega-squared (ω²), a less biased estimate of variance explained
///
/// ω² = (SSt − dft · MSE) / (SST + MSE)
///
/// Small effects can produce negative values.
pub fn omega_squared(ss_treatment: f64, df_treatment: f64, ss_total: f64, ms_error: f64) -> f64 {
    (ss_treatment - df_treatment * ms_error) / (ss_total + ms_error)
}

/// Cohen's f², from any measure of variance explained (R², η², ω²)
///
/// f² = v / (1 − v)
pub fn cohens_f(variance_explained: f64) -> f64 {
    variance_explained / (1.0 - variance_explained)
}
