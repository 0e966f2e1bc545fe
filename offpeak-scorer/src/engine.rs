//! Request-level entry point binding the data seams to the pipeline.
#![forbid(unsafe_code)]

use offpeak_core::{DestinationCatalog, Recommendation, SeasonalitySource, UserPreferences};

use crate::{RankingPipeline, RiskWeights, ScoreError, ValueScoreCalculator};

/// Looks up destinations for an origin and ranks them.
///
/// # Examples
///
/// ```
/// use offpeak_core::test_support::MemoryCatalog;
/// use offpeak_core::{Destination, UserPreferences};
/// use offpeak_scorer::RecommendationEngine;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = MemoryCatalog::with_destinations([
///     Destination::new("portugal-algarve", "Portugal", "Algarve", 1200.0, 867.0)?,
/// ]);
/// let engine = RecommendationEngine::new(&catalog, &catalog);
/// let preferences = UserPreferences::new("London", "October")?;
/// let recommendations = engine.recommend(&preferences)?;
/// assert_eq!(recommendations.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy)]
pub struct RecommendationEngine<'a> {
    catalog: &'a dyn DestinationCatalog,
    pipeline: RankingPipeline<'a>,
}

impl<'a> RecommendationEngine<'a> {
    /// Create an engine with default risk weights.
    #[must_use]
    pub fn new(
        catalog: &'a dyn DestinationCatalog,
        seasonality: &'a dyn SeasonalitySource,
    ) -> Self {
        Self {
            catalog,
            pipeline: RankingPipeline::new(seasonality),
        }
    }

    /// Replace the risk weights.
    ///
    /// # Errors
    /// Returns [`ScoreError::InvalidWeights`] when `weights` fail validation.
    pub fn with_weights(mut self, weights: RiskWeights) -> Result<Self, ScoreError> {
        self.pipeline = self
            .pipeline
            .with_calculator(ValueScoreCalculator::with_weights(weights)?);
        Ok(self)
    }

    /// Rank destinations reachable from the traveller's origin.
    ///
    /// # Errors
    /// Returns [`ScoreError`] when any destination cannot be scored.
    pub fn recommend(
        &self,
        preferences: &UserPreferences,
    ) -> Result<Vec<Recommendation>, ScoreError> {
        let destinations = self.catalog.lookup_destinations(preferences.origin());
        self.pipeline.rank(destinations, preferences)
    }
}

impl std::fmt::Debug for RecommendationEngine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendationEngine")
            .field("pipeline", &self.pipeline)
            .finish_non_exhaustive()
    }
}
