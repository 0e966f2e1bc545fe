//! Month-specific seasonal facts about destinations.
//!
//! A [`SeasonalityRecord`] describes the price multiplier, weather and crowd
//! risk, and flight reliability of a destination in one month. Records are
//! grouped per destination in [`DestinationSeasonality`] and looked up through
//! the [`SeasonalitySource`] seam so the scoring code never depends on where
//! the data lives.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{FlightReliability, Month, Season};

const GENERIC_REASON: &str = "Moderate season with balanced conditions";

/// Seasonal facts for one destination and month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalityRecord {
    /// Pricing season.
    pub season: Season,
    /// Multiplier applied to the destination's base cost, in `(0, 1]`.
    pub price_multiplier: f64,
    /// Probability of a rainy day, in `[0, 1]`.
    pub rain_risk: f64,
    /// Relative crowd density, in `[0, 1]`.
    pub crowd_level: f64,
    /// Expected flight reliability.
    #[serde(default)]
    pub flight_reliability: FlightReliability,
    /// Narrative reason for the pricing in this period.
    #[serde(default)]
    pub reason: String,
}

/// Errors returned by [`SeasonalityRecord::validate`].
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum SeasonalityRecordError {
    /// The price multiplier was not in `(0, 1]`.
    #[error("price multiplier must be in (0, 1], got {0}")]
    PriceMultiplierOutOfRange(f64),
    /// The rain risk was not in `[0, 1]`.
    #[error("rain risk must be in [0, 1], got {0}")]
    RainRiskOutOfRange(f64),
    /// The crowd level was not in `[0, 1]`.
    #[error("crowd level must be in [0, 1], got {0}")]
    CrowdLevelOutOfRange(f64),
}

impl SeasonalityRecord {
    /// Check the ranges of the numeric fields.
    ///
    /// NaN and infinite values fail the same checks.
    ///
    /// # Errors
    /// Returns [`SeasonalityRecordError`] describing the first field out of
    /// range.
    pub fn validate(&self) -> Result<(), SeasonalityRecordError> {
        if !(self.price_multiplier > 0.0 && self.price_multiplier <= 1.0) {
            return Err(SeasonalityRecordError::PriceMultiplierOutOfRange(
                self.price_multiplier,
            ));
        }
        if !(0.0..=1.0).contains(&self.rain_risk) {
            return Err(SeasonalityRecordError::RainRiskOutOfRange(self.rain_risk));
        }
        if !(0.0..=1.0).contains(&self.crowd_level) {
            return Err(SeasonalityRecordError::CrowdLevelOutOfRange(self.crowd_level));
        }
        Ok(())
    }

    /// Record used when a destination has no seasonality data at all.
    ///
    /// # Examples
    /// ```
    /// use offpeak_core::{Season, SeasonalityRecord};
    ///
    /// let record = SeasonalityRecord::generic_default();
    /// assert_eq!(record.season, Season::Shoulder);
    /// assert_eq!(record.price_multiplier, 0.75);
    /// ```
    #[must_use]
    pub fn generic_default() -> Self {
        Self {
            season: Season::Shoulder,
            price_multiplier: 0.75,
            rain_risk: 0.15,
            crowd_level: 0.4,
            flight_reliability: FlightReliability::Good,
            reason: GENERIC_REASON.to_owned(),
        }
    }
}

/// All seasonality records for a single destination.
///
/// In JSON the month records sit beside an optional `default` record:
///
/// ```json
/// { "default": { ... }, "January": { ... }, "February": { ... } }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DestinationSeasonality {
    /// Record used for months without a specific entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<SeasonalityRecord>,
    /// Month-specific records.
    #[serde(flatten)]
    pub months: BTreeMap<Month, SeasonalityRecord>,
}

impl DestinationSeasonality {
    /// Create an empty set of records with an optional destination default.
    #[must_use]
    pub fn new(default: Option<SeasonalityRecord>) -> Self {
        Self {
            default,
            months: BTreeMap::new(),
        }
    }

    /// Add a month record while returning `self` for chaining.
    #[must_use]
    pub fn with_month(mut self, month: Month, record: SeasonalityRecord) -> Self {
        self.months.insert(month, record);
        self
    }

    /// Return the record for `month`, if one exists.
    #[must_use]
    pub fn month(&self, month: Month) -> Option<&SeasonalityRecord> {
        self.months.get(&month)
    }

    /// Validate every record, reporting the month of the first failure.
    ///
    /// The destination default is reported with `None` as its month.
    ///
    /// # Errors
    /// Returns the offending month and its [`SeasonalityRecordError`].
    pub fn validate(&self) -> Result<(), (Option<Month>, SeasonalityRecordError)> {
        if let Some(default) = &self.default {
            default.validate().map_err(|err| (None, err))?;
        }
        for (month, record) in &self.months {
            record.validate().map_err(|err| (Some(*month), err))?;
        }
        Ok(())
    }
}

/// Seasonality records keyed by destination identifier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonalityTable {
    destinations: BTreeMap<String, DestinationSeasonality>,
}

impl SeasonalityTable {
    /// Construct an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the records for a destination.
    pub fn insert(&mut self, destination_id: impl Into<String>, records: DestinationSeasonality) {
        self.destinations.insert(destination_id.into(), records);
    }

    /// Add records for a destination while returning `self` for chaining.
    #[must_use]
    pub fn with_destination(
        mut self,
        destination_id: impl Into<String>,
        records: DestinationSeasonality,
    ) -> Self {
        self.insert(destination_id, records);
        self
    }

    /// Return the number of destinations with records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Report whether the table holds no destinations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Iterate over destination identifiers and their records.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DestinationSeasonality)> {
        self.destinations
            .iter()
            .map(|(id, records)| (id.as_str(), records))
    }

    /// Give every destination without its own default a copy of `record`.
    pub fn fill_missing_defaults(&mut self, record: &SeasonalityRecord) {
        for records in self.destinations.values_mut() {
            if records.default.is_none() {
                records.default = Some(record.clone());
            }
        }
    }
}

/// Read-only access to per-destination seasonality records.
///
/// Implementations return `None` when a destination has no records at all;
/// falling back to defaults is the caller's concern.
pub trait SeasonalitySource: Send + Sync {
    /// Return the records for `destination_id`, if any.
    fn destination_seasonality(&self, destination_id: &str) -> Option<&DestinationSeasonality>;
}

impl SeasonalitySource for SeasonalityTable {
    fn destination_seasonality(&self, destination_id: &str) -> Option<&DestinationSeasonality> {
        self.destinations.get(destination_id)
    }
}
