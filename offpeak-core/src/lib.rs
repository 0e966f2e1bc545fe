#![cfg_attr(docsrs, feature(doc_cfg))]
//! Core domain types for the off-peak travel engine.
//!
//! These models describe destinations, their month-by-month seasonality and
//! the preferences of a traveller, together with the seams the scoring engine
//! reads through. Constructors return `Result` to surface invalid input early.

pub mod destination;
pub mod enrichment;
pub mod month;
pub mod preferences;
pub mod recommendation;
pub mod score;
pub mod season;
pub mod seasonality;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use destination::{Destination, DestinationCatalog, DestinationError};
pub use enrichment::{DisabledEnricher, EnrichmentContext, EnrichmentError, ExplanationEnricher};
pub use month::Month;
pub use preferences::{PreferencesError, PreferencesRequest, UserPreferences};
pub use recommendation::{Recommendation, RiskLevel, TradeOffs};
pub use score::{RiskBreakdown, ScoreResult};
pub use season::{FlightReliability, Season};
pub use seasonality::{
    DestinationSeasonality, SeasonalityRecord, SeasonalityRecordError, SeasonalitySource,
    SeasonalityTable,
};
