//! Facade crate for the off-peak travel recommendation engine.
//!
//! This crate re-exports the core domain types and the value score engine,
//! and exposes the bundled catalog and HTTP enrichment provider behind the
//! `data` feature.
//!
//! ```
//! # #[cfg(feature = "data")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use offpeak_engine::{RecommendationEngine, StaticCatalog, UserPreferences};
//!
//! let catalog = StaticCatalog::builtin()?;
//! let preferences = UserPreferences::new("London", "September")?;
//! let ranked = RecommendationEngine::new(&catalog, &catalog).recommend(&preferences)?;
//! assert_eq!(ranked.len(), 5);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "data"))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]

pub use offpeak_core::{
    Destination, DestinationCatalog, DestinationError, DestinationSeasonality, DisabledEnricher,
    EnrichmentContext, EnrichmentError, ExplanationEnricher, FlightReliability, Month,
    PreferencesError, PreferencesRequest, Recommendation, RiskBreakdown, RiskLevel, ScoreResult,
    Season, SeasonalityRecord, SeasonalitySource, SeasonalityTable, TradeOffs, UserPreferences,
};

pub use offpeak_scorer::{
    MAX_RECOMMENDATIONS, MAX_RISK_PENALTY, MIN_RAW_SAVINGS, RankingPipeline,
    RecommendationEngine, RiskWeights, ScoreError, SeasonalityResolver, ValueScoreCalculator,
    enrich_recommendations,
};

#[cfg(feature = "data")]
pub use offpeak_data::{CatalogError, Region, StaticCatalog};

#[cfg(feature = "data")]
pub use offpeak_data::enrich::{EnricherBuildError, HttpEnricher, HttpEnricherConfig};

#[cfg(feature = "test-support")]
pub use offpeak_core::test_support;
