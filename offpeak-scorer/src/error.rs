//! Error types raised while scoring destinations.
#![forbid(unsafe_code)]

use offpeak_core::SeasonalityRecordError;
use thiserror::Error;

/// Errors raised by the value score calculator and ranking pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// The peak cost cannot serve as a savings denominator.
    #[error("destination {destination_id} has non-positive peak cost {peak_cost}")]
    NonPositivePeakCost {
        /// Identifier of the affected destination.
        destination_id: String,
        /// Peak cost found in the catalog.
        peak_cost: f64,
    },
    /// A numeric input was NaN or infinite.
    #[error("destination {destination_id} has non-finite {field}: {value}")]
    NonFiniteInput {
        /// Identifier of the affected destination.
        destination_id: String,
        /// Name of the offending input.
        field: &'static str,
        /// Value found.
        value: f64,
    },
    /// The seasonality record had a field outside its range.
    #[error("destination {destination_id} has invalid seasonality")]
    InvalidSeasonality {
        /// Identifier of the affected destination.
        destination_id: String,
        /// Range failure reported by the record.
        #[source]
        source: SeasonalityRecordError,
    },
    /// Risk weights were negative or not finite.
    #[error("risk weights must be finite and non-negative")]
    InvalidWeights,
}
