//! Presentation-ready recommendation records.

use serde::{Deserialize, Serialize};

use crate::FlightReliability;

/// Three-level bucket used for rain risk and crowd levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Little impact expected.
    Low,
    /// Noticeable but manageable.
    Moderate,
    /// Likely to affect the trip.
    High,
}

impl RiskLevel {
    /// Display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of what the traveller gives up for the lower price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeOffs {
    /// Rain risk bucket.
    pub rain_risk: RiskLevel,
    /// Rain risk as a share of days, e.g. `"12% of days"`.
    pub rain_days: String,
    /// Crowd level bucket.
    pub crowds: RiskLevel,
    /// Expected flight reliability.
    pub flight_reliability: FlightReliability,
}

/// One ranked destination, formatted for display.
///
/// Serializes to camelCase JSON:
///
/// ```
/// use offpeak_core::{FlightReliability, Recommendation, RiskLevel, TradeOffs};
///
/// let recommendation = Recommendation {
///     destination_id: "thailand-phuket".into(),
///     destination: "Thailand".into(),
///     location: "Phuket".into(),
///     best_window: "5 Sep–22 Sep".into(),
///     savings_percent: 42,
///     estimated_cost: "€1,180".into(),
///     peak_cost: "€2,030".into(),
///     trade_offs: TradeOffs {
///         rain_risk: RiskLevel::Moderate,
///         rain_days: "25% of days".into(),
///         crowds: RiskLevel::Low,
///         flight_reliability: FlightReliability::Good,
///     },
///     explanation: "Monsoon season keeps resorts quiet.".into(),
///     value_score: 0.39,
///     enriched: false,
/// };
/// let json = serde_json::to_value(&recommendation)?;
/// assert_eq!(json["savingsPercent"], 42);
/// assert_eq!(json["tradeOffs"]["rainRisk"], "Moderate");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Identifier of the recommended destination.
    pub destination_id: String,
    /// Destination display name.
    pub destination: String,
    /// Destination location.
    pub location: String,
    /// Suggested travel window, e.g. `"5 Sep–22 Sep"`.
    pub best_window: String,
    /// Savings against peak as a whole percentage.
    pub savings_percent: i64,
    /// Formatted off-peak cost.
    pub estimated_cost: String,
    /// Formatted peak cost.
    pub peak_cost: String,
    /// Trade-offs of travelling in this window.
    pub trade_offs: TradeOffs,
    /// Narrative explanation of the recommendation.
    pub explanation: String,
    /// Risk-adjusted value score used for ranking.
    pub value_score: f64,
    /// Whether `explanation` came from an enrichment provider.
    #[serde(default)]
    pub enriched: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RiskLevel::Low, "\"Low\"")]
    #[case(RiskLevel::Moderate, "\"Moderate\"")]
    #[case(RiskLevel::High, "\"High\"")]
    fn risk_levels_serialize_as_labels(#[case] level: RiskLevel, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&level).unwrap(), expected);
        assert_eq!(level.to_string(), expected.trim_matches('"'));
    }
}
