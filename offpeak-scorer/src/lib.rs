//! Value scoring and ranking of off-peak travel destinations.
//!
//! The crate turns a catalog of destinations plus month-by-month seasonality
//! into a short, ordered list of presentation-ready recommendations:
//! - **Seasonality resolution** picks the record for a destination and month,
//!   falling back to the destination default and then a generic default.
//! - **Value scoring** computes raw savings against the peak price and
//!   discounts them by a capped, preference-weighted risk penalty.
//! - **Ranking** drops destinations below the savings floor, orders the rest
//!   by adjusted value and formats the top entries.
//! - **Enrichment merge** swaps in generated explanations without ever
//!   failing the request.
//!
//! # Examples
//!
//! ```
//! use offpeak_core::test_support::MemoryCatalog;
//! use offpeak_core::{Destination, UserPreferences};
//! use offpeak_scorer::RankingPipeline;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = MemoryCatalog::default();
//! let pipeline = RankingPipeline::new(&catalog);
//! let destinations = [
//!     Destination::new("thailand-phuket", "Thailand", "Phuket", 2030.0, 1180.0)?,
//!     Destination::new("spain-barcelona", "Spain", "Barcelona", 1100.0, 1266.0)?,
//! ];
//! let preferences = UserPreferences::new("London", "September")?;
//! let ranked = pipeline.rank(destinations, &preferences)?;
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].destination_id, "thailand-phuket");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod engine;
mod enrichment;
mod error;
pub mod format;
mod ranking;
mod resolver;
mod value;

pub use engine::RecommendationEngine;
pub use enrichment::enrich_recommendations;
pub use error::ScoreError;
pub use format::{format_currency, format_recommendation};
pub use ranking::RankingPipeline;
pub use resolver::SeasonalityResolver;
pub use value::{RiskWeights, ValueScoreCalculator, reliability_penalty};

/// Minimum raw savings a destination needs to be recommended.
pub const MIN_RAW_SAVINGS: f64 = 0.20;

/// Maximum number of recommendations returned per request.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Upper bound on the combined risk penalty.
pub const MAX_RISK_PENALTY: f64 = 0.3;
