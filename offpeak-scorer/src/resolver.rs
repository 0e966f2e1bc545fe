//! Resolve the seasonality record that applies to a destination and month.
#![forbid(unsafe_code)]

use offpeak_core::{Month, SeasonalityRecord, SeasonalitySource};

/// Looks up seasonality with a fixed fallback order.
///
/// 1. The destination's record for the month.
/// 2. The destination's own default record.
/// 3. [`SeasonalityRecord::generic_default`].
///
/// A month that failed to parse skips straight to step 2.
#[derive(Clone, Copy)]
pub struct SeasonalityResolver<'a> {
    source: &'a dyn SeasonalitySource,
}

impl<'a> SeasonalityResolver<'a> {
    /// Create a resolver reading from `source`.
    #[must_use]
    pub const fn new(source: &'a dyn SeasonalitySource) -> Self {
        Self { source }
    }

    /// Resolve the record for `destination_id` in `month`.
    ///
    /// Never fails; unknown destinations receive the generic default.
    #[must_use]
    pub fn resolve(&self, destination_id: &str, month: Option<Month>) -> SeasonalityRecord {
        let Some(records) = self.source.destination_seasonality(destination_id) else {
            log::debug!("no seasonality for {destination_id}; using generic default");
            return SeasonalityRecord::generic_default();
        };
        month
            .and_then(|m| records.month(m))
            .or_else(|| records.default.as_ref())
            .cloned()
            .unwrap_or_else(SeasonalityRecord::generic_default)
    }
}

impl std::fmt::Debug for SeasonalityResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeasonalityResolver").finish_non_exhaustive()
    }
}
