//! Score, filter, order and format destinations for one request.
#![forbid(unsafe_code)]

use offpeak_core::{Destination, Recommendation, ScoreResult, SeasonalitySource, UserPreferences};

use crate::{
    MAX_RECOMMENDATIONS, MIN_RAW_SAVINGS, ScoreError, SeasonalityResolver, ValueScoreCalculator,
    format::format_recommendation,
};

/// Ranks candidate destinations by risk-adjusted value.
///
/// Every destination is scored first; a scoring error aborts the whole
/// request. Destinations whose raw savings fall below [`MIN_RAW_SAVINGS`] are
/// dropped, the rest are ordered by descending adjusted value (ties keep
/// catalog order) and at most [`MAX_RECOMMENDATIONS`] are formatted.
#[derive(Debug, Clone, Copy)]
pub struct RankingPipeline<'a> {
    resolver: SeasonalityResolver<'a>,
    calculator: ValueScoreCalculator,
}

impl<'a> RankingPipeline<'a> {
    /// Create a pipeline with default risk weights.
    #[must_use]
    pub fn new(seasonality: &'a dyn SeasonalitySource) -> Self {
        Self {
            resolver: SeasonalityResolver::new(seasonality),
            calculator: ValueScoreCalculator::default(),
        }
    }

    /// Replace the calculator while returning `self` for chaining.
    #[must_use]
    pub const fn with_calculator(mut self, calculator: ValueScoreCalculator) -> Self {
        self.calculator = calculator;
        self
    }

    /// Score every destination without filtering or ordering.
    ///
    /// # Errors
    /// Returns the first [`ScoreError`] raised by the calculator.
    pub fn score_all<I>(
        &self,
        destinations: I,
        preferences: &UserPreferences,
    ) -> Result<Vec<(Destination, ScoreResult)>, ScoreError>
    where
        I: IntoIterator<Item = Destination>,
    {
        destinations
            .into_iter()
            .map(|destination| {
                let record = self.resolver.resolve(&destination.id, preferences.month());
                let score = self.calculator.score(
                    &destination,
                    &record,
                    preferences.weather_tolerance(),
                    preferences.crowd_tolerance(),
                )?;
                Ok::<_, ScoreError>((destination, score))
            })
            .collect()
    }

    /// Produce at most [`MAX_RECOMMENDATIONS`] recommendations.
    ///
    /// # Errors
    /// Returns [`ScoreError`] when any destination cannot be scored.
    pub fn rank<I>(
        &self,
        destinations: I,
        preferences: &UserPreferences,
    ) -> Result<Vec<Recommendation>, ScoreError>
    where
        I: IntoIterator<Item = Destination>,
    {
        log::debug!(
            "ranking for {} in {} (flex weeks {}, trip length {})",
            preferences.origin(),
            preferences.month_label(),
            preferences.flex_weeks(),
            preferences.trip_length()
        );
        let scored = self.score_all(destinations, preferences)?;
        let candidates = scored.len();

        let mut eligible: Vec<_> = scored
            .into_iter()
            .filter(|(_, score)| score.raw_savings >= MIN_RAW_SAVINGS)
            .collect();
        log::debug!(
            "{} of {candidates} destinations meet the savings floor",
            eligible.len()
        );

        eligible.sort_by(|(_, a), (_, b)| b.adjusted_value.total_cmp(&a.adjusted_value));
        eligible.truncate(MAX_RECOMMENDATIONS);

        Ok(eligible
            .iter()
            .map(|(destination, score)| format_recommendation(destination, score, preferences))
            .collect())
    }
}
