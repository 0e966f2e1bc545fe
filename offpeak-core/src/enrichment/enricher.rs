use serde::Serialize;

use super::EnrichmentError;
use crate::{Recommendation, UserPreferences};

/// Request details passed to an [`ExplanationEnricher`] for prompt building.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentContext {
    /// Traveller's origin.
    pub origin: String,
    /// Requested month for display.
    pub month: String,
    /// Weather tolerance in `[0, 1]`.
    pub weather_tolerance: f64,
    /// Crowd tolerance in `[0, 1]`.
    pub crowd_tolerance: f64,
    /// Date flexibility in weeks.
    pub flex_weeks: u8,
    /// Trip length in nights.
    pub trip_length: u16,
}

impl From<&UserPreferences> for EnrichmentContext {
    fn from(preferences: &UserPreferences) -> Self {
        Self {
            origin: preferences.origin().to_owned(),
            month: preferences.month_label().to_owned(),
            weather_tolerance: preferences.weather_tolerance(),
            crowd_tolerance: preferences.crowd_tolerance(),
            flex_weeks: preferences.flex_weeks(),
            trip_length: preferences.trip_length(),
        }
    }
}

/// Generate narrative explanations for a ranked list of recommendations.
///
/// Implementations return one line per recommendation in order. Fewer lines
/// than recommendations is allowed; callers keep the static text for any
/// recommendation without a generated line.
///
/// # Examples
///
/// ```
/// use offpeak_core::{
///     EnrichmentContext, EnrichmentError, ExplanationEnricher, Recommendation,
/// };
///
/// struct Shouting;
///
/// impl ExplanationEnricher for Shouting {
///     fn is_enabled(&self) -> bool {
///         true
///     }
///
///     fn generate_explanations(
///         &self,
///         recommendations: &[Recommendation],
///         _context: &EnrichmentContext,
///     ) -> Result<Vec<String>, EnrichmentError> {
///         Ok(recommendations
///             .iter()
///             .map(|r| r.explanation.to_uppercase())
///             .collect())
///     }
/// }
///
/// assert!(Shouting.is_enabled());
/// ```
pub trait ExplanationEnricher: Send + Sync {
    /// Whether the enricher is configured to make requests.
    fn is_enabled(&self) -> bool;

    /// Produce explanation lines for `recommendations`.
    ///
    /// # Errors
    /// Returns [`EnrichmentError`] when the provider is disabled, unreachable
    /// or returns an unusable response.
    fn generate_explanations(
        &self,
        recommendations: &[Recommendation],
        context: &EnrichmentContext,
    ) -> Result<Vec<String>, EnrichmentError>;
}

/// Enricher that is never enabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledEnricher;

impl ExplanationEnricher for DisabledEnricher {
    fn is_enabled(&self) -> bool {
        false
    }

    fn generate_explanations(
        &self,
        _recommendations: &[Recommendation],
        _context: &EnrichmentContext,
    ) -> Result<Vec<String>, EnrichmentError> {
        Err(EnrichmentError::Disabled)
    }
}
