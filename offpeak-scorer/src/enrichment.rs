//! Merge generated explanations into ranked recommendations.
#![forbid(unsafe_code)]

use offpeak_core::{EnrichmentContext, ExplanationEnricher, Recommendation};

/// Replace static explanations with generated ones where available.
///
/// This never fails. A disabled enricher or an empty list returns the input
/// untouched; an enrichment error is logged and the input is returned. On
/// success, explanation `i` is replaced by generated line `i` when that line
/// exists and is not blank, and the recommendation is marked `enriched`.
/// Length and order are always preserved.
#[must_use]
pub fn enrich_recommendations(
    enricher: &dyn ExplanationEnricher,
    mut recommendations: Vec<Recommendation>,
    context: &EnrichmentContext,
) -> Vec<Recommendation> {
    if !enricher.is_enabled() || recommendations.is_empty() {
        return recommendations;
    }
    let lines = match enricher.generate_explanations(&recommendations, context) {
        Ok(lines) => lines,
        Err(err) => {
            log::warn!("explanation enrichment failed, keeping static text: {err}");
            return recommendations;
        }
    };
    for (recommendation, line) in recommendations.iter_mut().zip(lines) {
        let text = line.trim();
        if !text.is_empty() {
            text.clone_into(&mut recommendation.explanation);
            recommendation.enriched = true;
        }
    }
    recommendations
}
