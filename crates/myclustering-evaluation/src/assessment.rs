//! Thresholded quality assessment of a clustering run.

use myclustering_core::Assignment;

/// Minimum acceptable mean silhouette.
pub const MIN_SILHOUETTE: f64 = 0.2;
/// Maximum acceptable fraction of noise samples.
pub const MAX_NOISE_RATIO: f64 = 0.5;

/// Outcome of checking a run against the named thresholds.
#[derive(Debug, Clone)]
pub struct QualityAssessment {
    pub silhouette_ok: bool,
    pub noise_ok: bool,
    pub overall_pass: bool,
    /// Specific issues found.
    pub issues: Vec<String>,
}

/// Assess a fit from its silhouette score and label distribution.
pub fn assess(silhouette: f64, assignment: &Assignment) -> QualityAssessment {
    let mut issues = Vec::new();

    let silhouette_ok = silhouette >= MIN_SILHOUETTE;
    if !silhouette_ok {
        issues.push(format!(
            "silhouette {silhouette:.3} below minimum {MIN_SILHOUETTE:.3}"
        ));
    }

    let noise_ratio = assignment.noise_ratio();
    let noise_ok = noise_ratio <= MAX_NOISE_RATIO;
    if !noise_ok {
        issues.push(format!(
            "noise ratio {noise_ratio:.2} above maximum {MAX_NOISE_RATIO:.2}"
        ));
    }

    QualityAssessment {
        silhouette_ok,
        noise_ok,
        overall_pass: silhouette_ok && noise_ok,
        issues,
    }
}
