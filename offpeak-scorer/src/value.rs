//! Risk-adjusted value scoring for a single destination.
//!
//! Raw savings compare the seasonal cost against the peak baseline. A risk
//! penalty built from weather, crowds and flight reliability, each weighted by
//! how averse the traveller is, then discounts the savings. The penalty is
//! capped at [`MAX_RISK_PENALTY`](crate::MAX_RISK_PENALTY) so risk can never
//! erase more than 30% of the savings.
#![forbid(unsafe_code)]

use offpeak_core::{
    Destination, FlightReliability, RiskBreakdown, ScoreResult, SeasonalityRecord,
};

use crate::{MAX_RISK_PENALTY, ScoreError};

/// Relative weighting of each risk term in the penalty.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RiskWeights {
    /// Multiplier applied to rain risk.
    pub weather: f64,
    /// Multiplier applied to crowd level.
    pub crowd: f64,
    /// Multiplier applied to the flight reliability table.
    pub reliability: f64,
}

impl RiskWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoreError::InvalidWeights`] when any value is negative or
    /// not finite.
    pub fn validate(self) -> Result<Self, ScoreError> {
        if self.has_finite_values() && self.has_non_negative_values() {
            Ok(self)
        } else {
            Err(ScoreError::InvalidWeights)
        }
    }

    const fn has_finite_values(self) -> bool {
        self.weather.is_finite() && self.crowd.is_finite() && self.reliability.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.weather >= 0.0 && self.crowd >= 0.0 && self.reliability >= 0.0
    }
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            weather: 0.2,
            crowd: 0.1,
            reliability: 0.2,
        }
    }
}

/// Base penalty for a flight reliability label before weighting.
///
/// Unrecognised labels are treated like [`FlightReliability::Normal`].
#[must_use]
pub const fn reliability_penalty(reliability: &FlightReliability) -> f64 {
    match reliability {
        FlightReliability::Excellent => 0.0,
        FlightReliability::Good => 0.02,
        FlightReliability::Variable => 0.12,
        FlightReliability::Normal | FlightReliability::Other(_) => 0.05,
    }
}

/// Computes [`ScoreResult`] values from a destination and its seasonality.
///
/// # Examples
///
/// ```
/// use offpeak_core::{Destination, SeasonalityRecord};
/// use offpeak_scorer::ValueScoreCalculator;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let destination = Destination::new("greece-athens", "Greece", "Athens", 1400.0, 1400.0)?;
/// let record = SeasonalityRecord::generic_default();
/// let score = ValueScoreCalculator::default().score(&destination, &record, 0.5, 0.5)?;
/// assert!(score.adjusted_value <= score.raw_savings);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ValueScoreCalculator {
    weights: RiskWeights,
}

impl ValueScoreCalculator {
    /// Build a calculator with custom risk weights.
    ///
    /// # Errors
    /// Returns [`ScoreError::InvalidWeights`] when the weights fail
    /// [`RiskWeights::validate`].
    pub fn with_weights(weights: RiskWeights) -> Result<Self, ScoreError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights in use.
    #[must_use]
    pub const fn weights(&self) -> RiskWeights {
        self.weights
    }

    /// Score `destination` for the month described by `record`.
    ///
    /// Tolerances run from `0` (averse) to `1` (indifferent); a tolerance of
    /// `1` removes the corresponding penalty term entirely.
    ///
    /// # Errors
    /// Returns [`ScoreError::NonPositivePeakCost`] when the peak cost is zero
    /// or negative, [`ScoreError::NonFiniteInput`] when any numeric input
    /// is NaN or infinite, and [`ScoreError::InvalidSeasonality`] when the
    /// record's multiplier, rain risk or crowd level is out of range.
    #[expect(
        clippy::float_arithmetic,
        reason = "value scoring combines costs and risk terms arithmetically"
    )]
    pub fn score(
        &self,
        destination: &Destination,
        record: &SeasonalityRecord,
        weather_tolerance: f64,
        crowd_tolerance: f64,
    ) -> Result<ScoreResult, ScoreError> {
        let id = destination.id.as_str();
        ensure_finite(id, "peak cost", destination.peak_cost)?;
        ensure_finite(id, "base cost", destination.base_cost)?;
        ensure_finite(id, "price multiplier", record.price_multiplier)?;
        ensure_finite(id, "rain risk", record.rain_risk)?;
        ensure_finite(id, "crowd level", record.crowd_level)?;
        ensure_finite(id, "weather tolerance", weather_tolerance)?;
        ensure_finite(id, "crowd tolerance", crowd_tolerance)?;
        record
            .validate()
            .map_err(|source| ScoreError::InvalidSeasonality {
                destination_id: destination.id.clone(),
                source,
            })?;
        if destination.peak_cost <= 0.0 {
            return Err(ScoreError::NonPositivePeakCost {
                destination_id: destination.id.clone(),
                peak_cost: destination.peak_cost,
            });
        }

        let off_peak_cost = destination.base_cost * record.price_multiplier;
        let raw_savings = (destination.peak_cost - off_peak_cost) / destination.peak_cost;

        let breakdown = RiskBreakdown {
            weather: record.rain_risk * (1.0 - weather_tolerance) * self.weights.weather,
            crowd: record.crowd_level * (1.0 - crowd_tolerance) * self.weights.crowd,
            reliability: reliability_penalty(&record.flight_reliability)
                * self.weights.reliability,
        };
        let risk_penalty = breakdown.total().clamp(0.0, MAX_RISK_PENALTY);
        let adjusted_value = raw_savings * (1.0 - risk_penalty);

        Ok(ScoreResult {
            raw_savings,
            risk_penalty,
            adjusted_value,
            season_data: record.clone(),
            breakdown,
        })
    }
}

fn ensure_finite(destination_id: &str, field: &'static str, value: f64) -> Result<(), ScoreError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ScoreError::NonFiniteInput {
            destination_id: destination_id.to_owned(),
            field,
            value,
        })
    }
}
