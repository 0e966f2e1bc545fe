//! Per-request user preferences and their validation.
//!
//! Callers collect loosely-typed input into a [`PreferencesRequest`] (every
//! field optional, matching what arrives over the wire) and convert it with
//! [`UserPreferences::try_from`], which applies defaults and rejects invalid
//! values before any scoring happens.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Month;

/// Default flexibility window in weeks.
pub const DEFAULT_FLEX_WEEKS: u8 = 2;
/// Default trip length in nights.
pub const DEFAULT_TRIP_LENGTH: u16 = 7;
/// Default weather and crowd tolerance.
pub const DEFAULT_TOLERANCE: f64 = 0.5;

/// Raw, unvalidated preferences as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesRequest {
    /// Free-text origin location.
    #[serde(default)]
    pub origin: Option<String>,
    /// Calendar month name.
    #[serde(default)]
    pub month: Option<String>,
    /// Date flexibility in weeks.
    #[serde(default)]
    pub flex_weeks: Option<u8>,
    /// Trip length in nights.
    #[serde(default)]
    pub trip_length: Option<u16>,
    /// Weather risk tolerance, `0` risk-averse to `1` risk-tolerant.
    #[serde(default, alias = "weatherRisk")]
    pub weather_tolerance: Option<f64>,
    /// Crowd tolerance, `0` crowd-averse to `1` crowd-tolerant.
    #[serde(default)]
    pub crowd_tolerance: Option<f64>,
}

/// Errors raised while validating [`PreferencesRequest`] values.
#[derive(Debug, Error, PartialEq)]
pub enum PreferencesError {
    /// The origin was missing or blank.
    #[error("origin is required")]
    MissingOrigin,
    /// The month was missing or blank.
    #[error("month is required")]
    MissingMonth,
    /// Flexibility must be at least one week.
    #[error("flex weeks must be at least 1")]
    ZeroFlexWeeks,
    /// Trip length must be at least one night.
    #[error("trip length must be at least 1 night")]
    ZeroTripLength,
    /// A tolerance fell outside `[0, 1]` or was not finite.
    #[error("{field} must be between 0.0 and 1.0, got {value}")]
    ToleranceOutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Value supplied by the caller.
        value: f64,
    },
}

/// Validated preferences for a single recommendation request.
///
/// `flex_weeks` and `trip_length` are carried for callers and logging but do
/// not influence scoring.
///
/// # Examples
/// ```
/// use offpeak_core::{Month, UserPreferences};
///
/// # fn main() -> Result<(), offpeak_core::PreferencesError> {
/// let preferences = UserPreferences::new("London", "september")?
///     .with_weather_tolerance(0.8)?;
/// assert_eq!(preferences.month(), Some(Month::September));
/// assert_eq!(preferences.crowd_tolerance(), 0.5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UserPreferences {
    origin: String,
    month_label: String,
    month: Option<Month>,
    flex_weeks: u8,
    trip_length: u16,
    weather_tolerance: f64,
    crowd_tolerance: f64,
}

impl UserPreferences {
    /// Build preferences with defaults for every optional field.
    ///
    /// # Errors
    /// Returns [`PreferencesError::MissingOrigin`] or
    /// [`PreferencesError::MissingMonth`] for blank input.
    pub fn new(origin: impl Into<String>, month: impl Into<String>) -> Result<Self, PreferencesError> {
        Self::try_from(PreferencesRequest {
            origin: Some(origin.into()),
            month: Some(month.into()),
            ..PreferencesRequest::default()
        })
    }

    /// Replace the weather tolerance.
    ///
    /// # Errors
    /// Returns [`PreferencesError::ToleranceOutOfRange`] outside `[0, 1]`.
    pub fn with_weather_tolerance(mut self, tolerance: f64) -> Result<Self, PreferencesError> {
        self.weather_tolerance = validate_tolerance("weather tolerance", tolerance)?;
        Ok(self)
    }

    /// Replace the crowd tolerance.
    ///
    /// # Errors
    /// Returns [`PreferencesError::ToleranceOutOfRange`] outside `[0, 1]`.
    pub fn with_crowd_tolerance(mut self, tolerance: f64) -> Result<Self, PreferencesError> {
        self.crowd_tolerance = validate_tolerance("crowd tolerance", tolerance)?;
        Ok(self)
    }

    /// Origin as supplied, trimmed.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Parsed month, or `None` when the text matched no calendar month.
    #[must_use]
    pub const fn month(&self) -> Option<Month> {
        self.month
    }

    /// Month for display: the canonical name when parsed, else the input text.
    #[must_use]
    pub fn month_label(&self) -> &str {
        self.month
            .map_or(self.month_label.as_str(), |month| month.as_str())
    }

    /// Date flexibility in weeks.
    #[must_use]
    pub const fn flex_weeks(&self) -> u8 {
        self.flex_weeks
    }

    /// Trip length in nights.
    #[must_use]
    pub const fn trip_length(&self) -> u16 {
        self.trip_length
    }

    /// Weather risk tolerance in `[0, 1]`.
    #[must_use]
    pub const fn weather_tolerance(&self) -> f64 {
        self.weather_tolerance
    }

    /// Crowd tolerance in `[0, 1]`.
    #[must_use]
    pub const fn crowd_tolerance(&self) -> f64 {
        self.crowd_tolerance
    }
}

impl TryFrom<PreferencesRequest> for UserPreferences {
    type Error = PreferencesError;

    fn try_from(request: PreferencesRequest) -> Result<Self, Self::Error> {
        let origin = non_blank(request.origin).ok_or(PreferencesError::MissingOrigin)?;
        let month_label = non_blank(request.month).ok_or(PreferencesError::MissingMonth)?;
        let flex_weeks = request.flex_weeks.unwrap_or(DEFAULT_FLEX_WEEKS);
        if flex_weeks == 0 {
            return Err(PreferencesError::ZeroFlexWeeks);
        }
        let trip_length = request.trip_length.unwrap_or(DEFAULT_TRIP_LENGTH);
        if trip_length == 0 {
            return Err(PreferencesError::ZeroTripLength);
        }
        let weather_tolerance = validate_tolerance(
            "weather tolerance",
            request.weather_tolerance.unwrap_or(DEFAULT_TOLERANCE),
        )?;
        let crowd_tolerance = validate_tolerance(
            "crowd tolerance",
            request.crowd_tolerance.unwrap_or(DEFAULT_TOLERANCE),
        )?;
        let month = month_label.parse().ok();

        Ok(Self {
            origin,
            month_label,
            month,
            flex_weeks,
            trip_length,
            weather_tolerance,
            crowd_tolerance,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

fn validate_tolerance(field: &'static str, value: f64) -> Result<f64, PreferencesError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(PreferencesError::ToleranceOutOfRange { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request(origin: Option<&str>, month: Option<&str>) -> PreferencesRequest {
        PreferencesRequest {
            origin: origin.map(str::to_owned),
            month: month.map(str::to_owned),
            ..PreferencesRequest::default()
        }
    }

    #[rstest]
    fn applies_defaults() {
        let preferences =
            UserPreferences::try_from(request(Some("Berlin"), Some("March"))).unwrap();
        assert_eq!(preferences.flex_weeks(), DEFAULT_FLEX_WEEKS);
        assert_eq!(preferences.trip_length(), DEFAULT_TRIP_LENGTH);
        assert_eq!(preferences.weather_tolerance(), DEFAULT_TOLERANCE);
        assert_eq!(preferences.crowd_tolerance(), DEFAULT_TOLERANCE);
    }

    #[rstest]
    #[case(None, Some("March"), PreferencesError::MissingOrigin)]
    #[case(Some("   "), Some("March"), PreferencesError::MissingOrigin)]
    #[case(Some("Berlin"), None, PreferencesError::MissingMonth)]
    #[case(Some("Berlin"), Some(""), PreferencesError::MissingMonth)]
    fn rejects_missing_required_fields(
        #[case] origin: Option<&str>,
        #[case] month: Option<&str>,
        #[case] expected: PreferencesError,
    ) {
        let err = UserPreferences::try_from(request(origin, month)).unwrap_err();
        assert_eq!(err, expected);
    }

    #[rstest]
    fn honours_explicit_zero_tolerance() {
        let mut raw = request(Some("Berlin"), Some("March"));
        raw.weather_tolerance = Some(0.0);
        let preferences = UserPreferences::try_from(raw).unwrap();
        assert_eq!(preferences.weather_tolerance(), 0.0);
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.5)]
    #[case(f64::NAN)]
    fn rejects_out_of_range_tolerance(#[case] value: f64) {
        let err = UserPreferences::new("Berlin", "March")
            .unwrap()
            .with_crowd_tolerance(value)
            .unwrap_err();
        assert!(matches!(
            err,
            PreferencesError::ToleranceOutOfRange { field: "crowd tolerance", .. }
        ));
    }

    #[rstest]
    fn rejects_zero_flex_and_trip_length() {
        let mut raw = request(Some("Berlin"), Some("March"));
        raw.flex_weeks = Some(0);
        assert_eq!(UserPreferences::try_from(raw.clone()), Err(PreferencesError::ZeroFlexWeeks));
        raw.flex_weeks = None;
        raw.trip_length = Some(0);
        assert_eq!(UserPreferences::try_from(raw), Err(PreferencesError::ZeroTripLength));
    }

    #[rstest]
    fn unknown_month_is_kept_as_label() {
        let preferences = UserPreferences::new("Berlin", " Smarch ").unwrap();
        assert!(preferences.month().is_none());
        assert_eq!(preferences.month_label(), "Smarch");
    }

    #[rstest]
    fn accepts_weather_risk_alias() {
        let raw: PreferencesRequest =
            serde_json::from_str(r#"{"origin": "Paris", "month": "May", "weatherRisk": 0.9}"#)
                .unwrap();
        let preferences = UserPreferences::try_from(raw).unwrap();
        assert_eq!(preferences.weather_tolerance(), 0.9);
    }
}
