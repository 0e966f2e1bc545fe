//! Per-destination scoring output.

use serde::Serialize;

use crate::SeasonalityRecord;

/// Individual risk penalty terms before the cap is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskBreakdown {
    /// Rain risk weighted by the user's weather aversion.
    pub weather: f64,
    /// Crowd level weighted by the user's crowd aversion.
    pub crowd: f64,
    /// Flight reliability penalty.
    pub reliability: f64,
}

impl RiskBreakdown {
    /// Sum of all terms, uncapped.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.weather + self.crowd + self.reliability
    }
}

/// Value score for one destination under one set of preferences.
///
/// Recomputed for every request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// `(peak - off_peak) / peak`; negative when off-peak costs more.
    pub raw_savings: f64,
    /// Capped risk penalty in `[0, 0.3]`.
    pub risk_penalty: f64,
    /// `raw_savings * (1 - risk_penalty)`.
    pub adjusted_value: f64,
    /// Seasonality record the score was computed from.
    pub season_data: SeasonalityRecord,
    /// Uncapped penalty terms.
    pub breakdown: RiskBreakdown,
}
