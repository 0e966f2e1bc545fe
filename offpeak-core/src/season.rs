//! Descriptive labels attached to seasonality records.
//!
//! Both enums round-trip through their string labels so that data files
//! carrying labels this crate does not know still load. Unknown labels are
//! preserved verbatim and handled by the documented fallbacks.
use serde::{Deserialize, Serialize};

/// Pricing season for a destination in a given month.
///
/// # Examples
/// ```
/// use offpeak_core::Season;
///
/// assert_eq!(Season::from("offpeak"), Season::OffPeak);
/// assert_eq!(Season::Shoulder.as_str(), "shoulder");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Season {
    /// Highest demand and prices.
    Peak,
    /// Transitional, moderately discounted period.
    Shoulder,
    /// Lowest demand and prices.
    OffPeak,
    /// A label not recognised by this crate.
    Unrecognised(String),
}

impl Season {
    /// Return the label used in data files.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Peak => "peak",
            Self::Shoulder => "shoulder",
            Self::OffPeak => "offpeak",
            Self::Unrecognised(label) => label.as_str(),
        }
    }
}

impl From<&str> for Season {
    fn from(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "peak" => Self::Peak,
            "shoulder" => Self::Shoulder,
            "offpeak" | "off-peak" => Self::OffPeak,
            _ => Self::Unrecognised(label.to_owned()),
        }
    }
}

impl From<String> for Season {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl From<Season> for String {
    fn from(season: Season) -> Self {
        match season {
            Season::Unrecognised(label) => label,
            other => other.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected reliability of flights into a destination.
///
/// Missing values default to [`FlightReliability::Normal`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FlightReliability {
    /// Flights almost never disrupted.
    Excellent,
    /// Occasional disruption.
    Good,
    /// Typical disruption levels.
    #[default]
    Normal,
    /// Frequent schedule changes or cancellations.
    Variable,
    /// A label not recognised by this crate.
    Other(String),
}

impl FlightReliability {
    /// Return the display label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Normal => "Normal",
            Self::Variable => "Variable",
            Self::Other(label) => label.as_str(),
        }
    }
}

impl From<&str> for FlightReliability {
    fn from(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "excellent" => Self::Excellent,
            "good" => Self::Good,
            "normal" => Self::Normal,
            "variable" => Self::Variable,
            _ => Self::Other(label.to_owned()),
        }
    }
}

impl From<String> for FlightReliability {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl From<FlightReliability> for String {
    fn from(reliability: FlightReliability) -> Self {
        match reliability {
            FlightReliability::Other(label) => label,
            other => other.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for FlightReliability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("peak", Season::Peak)]
    #[case("Shoulder", Season::Shoulder)]
    #[case("offpeak", Season::OffPeak)]
    fn parses_known_seasons(#[case] label: &str, #[case] expected: Season) {
        assert_eq!(Season::from(label), expected);
    }

    #[test]
    fn unknown_season_keeps_label() {
        let season: Season = serde_json::from_str("\"monsoon\"").unwrap();
        assert_eq!(season, Season::Unrecognised("monsoon".to_owned()));
        assert_eq!(serde_json::to_string(&season).unwrap(), "\"monsoon\"");
    }

    #[test]
    fn reliability_round_trips_known_label() {
        let reliability: FlightReliability = serde_json::from_str("\"Variable\"").unwrap();
        assert_eq!(reliability, FlightReliability::Variable);
        assert_eq!(reliability.to_string(), "Variable");
    }

    #[test]
    fn reliability_defaults_to_normal() {
        assert_eq!(FlightReliability::default(), FlightReliability::Normal);
    }
}
