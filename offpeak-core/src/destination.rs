//! Destinations offered by a catalog and the catalog seam itself.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::FlightReliability;

/// A candidate travel destination.
///
/// Costs are currency amounts for a whole trip. `peak_cost` is the
/// peak-season baseline; `base_cost` is the unmodified reference that
/// seasonal price multipliers are applied to.
///
/// # Examples
///
/// ```
/// use offpeak_core::Destination;
///
/// # fn main() -> Result<(), offpeak_core::DestinationError> {
/// let destination = Destination::new("thailand-phuket", "Thailand", "Phuket", 2030.0, 2030.0)?;
/// assert_eq!(destination.id, "thailand-phuket");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Unique identifier used to key seasonality data.
    pub id: String,
    /// Display name, usually the country.
    pub name: String,
    /// Display location, usually the city or region.
    pub location: String,
    /// Peak-season trip cost.
    pub peak_cost: f64,
    /// Reference trip cost before seasonal multipliers.
    pub base_cost: f64,
    /// Static weather label, e.g. `"Good"`. Carried for display only;
    /// scoring reads rain risk from seasonality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
    /// Static crowd label, e.g. `"Low"`. Carried for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crowds: Option<String>,
    /// Static flight reliability label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_reliability: Option<FlightReliability>,
    /// Hand-written summary of why the off-peak window works. Leads the
    /// off-peak explanation when the month record gives no reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Errors returned by [`Destination::new`].
#[derive(Debug, Error, PartialEq)]
pub enum DestinationError {
    /// The identifier was empty or whitespace.
    #[error("destination id must not be empty")]
    EmptyId,
    /// Peak cost was zero, negative, or not finite.
    #[error("peak cost must be a positive amount, got {0}")]
    NonPositivePeakCost(f64),
    /// Base cost was negative or not finite.
    #[error("base cost must be a non-negative amount, got {0}")]
    InvalidBaseCost(f64),
}

impl Destination {
    /// Validates and constructs a [`Destination`] without optional labels.
    ///
    /// # Errors
    /// Returns [`DestinationError`] for an empty id, a peak cost that is not
    /// strictly positive, or a negative base cost.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        peak_cost: f64,
        base_cost: f64,
    ) -> Result<Self, DestinationError> {
        let destination = Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            peak_cost,
            base_cost,
            weather: None,
            crowds: None,
            flight_reliability: None,
            summary: None,
        };
        destination.validate()?;
        Ok(destination)
    }

    /// Check the invariants enforced by [`Destination::new`].
    ///
    /// Useful for destinations decoded from external data.
    ///
    /// # Errors
    /// Returns [`DestinationError`] describing the first violated invariant.
    pub fn validate(&self) -> Result<(), DestinationError> {
        if self.id.trim().is_empty() {
            return Err(DestinationError::EmptyId);
        }
        if !self.peak_cost.is_finite() || self.peak_cost <= 0.0 {
            return Err(DestinationError::NonPositivePeakCost(self.peak_cost));
        }
        if !self.base_cost.is_finite() || self.base_cost < 0.0 {
            return Err(DestinationError::InvalidBaseCost(self.base_cost));
        }
        Ok(())
    }

    /// Attach a hand-written summary while returning `self` for chaining.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

/// Read-only source of destinations reachable from an origin.
///
/// The origin is free text; implementations decide which subset of their
/// catalog it selects. It never affects scoring.
///
/// # Examples
///
/// ```rust
/// use offpeak_core::{Destination, DestinationCatalog};
///
/// struct Single(Destination);
///
/// impl DestinationCatalog for Single {
///     fn lookup_destinations(
///         &self,
///         _origin: &str,
///     ) -> Box<dyn Iterator<Item = Destination> + Send + '_> {
///         Box::new(std::iter::once(self.0.clone()))
///     }
/// }
///
/// let destination = Destination::new("spain-barcelona", "Spain", "Barcelona", 1100.0, 960.0)?;
/// let catalog = Single(destination);
/// assert_eq!(catalog.lookup_destinations("London").count(), 1);
/// # Ok::<(), offpeak_core::DestinationError>(())
/// ```
pub trait DestinationCatalog: Send + Sync {
    /// Return destinations in catalog order for `origin`.
    fn lookup_destinations(&self, origin: &str) -> Box<dyn Iterator<Item = Destination> + Send + '_>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn requires_identifier() {
        let result = Destination::new("  ", "Spain", "Barcelona", 1100.0, 960.0);
        assert_eq!(result, Err(DestinationError::EmptyId));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-10.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_unusable_peak_cost(#[case] peak_cost: f64) {
        let result = Destination::new("spain-barcelona", "Spain", "Barcelona", peak_cost, 960.0);
        assert!(matches!(result, Err(DestinationError::NonPositivePeakCost(_))));
    }

    #[rstest]
    fn rejects_negative_base_cost() {
        let result = Destination::new("spain-barcelona", "Spain", "Barcelona", 1100.0, -1.0);
        assert_eq!(result, Err(DestinationError::InvalidBaseCost(-1.0)));
    }

    #[rstest]
    fn validates_decoded_destination() {
        let json = r#"{"id": "peru-cusco", "name": "Peru", "location": "Cusco",
                       "peakCost": -1, "baseCost": 900}"#;

        let destination: Destination = serde_json::from_str(json).unwrap();

        assert_eq!(
            destination.validate(),
            Err(DestinationError::NonPositivePeakCost(-1.0))
        );
    }

    #[rstest]
    fn decodes_optional_labels() {
        let json = r#"{"id": "mexico-tulum", "name": "Mexico", "location": "Tulum",
                       "peakCost": 1850, "baseCost": 1400, "crowds": "Very Low",
                       "flightReliability": "Good"}"#;

        let destination: Destination = serde_json::from_str(json).unwrap();

        assert_eq!(destination.crowds.as_deref(), Some("Very Low"));
        assert_eq!(destination.flight_reliability, Some(FlightReliability::Good));
        assert!(destination.summary.is_none());
    }
}
