//! In-memory collaborators used by unit and behaviour tests.

use crate::{
    Destination, DestinationCatalog, DestinationSeasonality, EnrichmentContext, EnrichmentError,
    ExplanationEnricher, Recommendation, SeasonalitySource, SeasonalityTable,
};

/// In-memory catalog serving every destination for any origin.
///
/// Holds its own [`SeasonalityTable`] so a single value can back both data
/// seams.
#[derive(Default, Debug, Clone)]
pub struct MemoryCatalog {
    destinations: Vec<Destination>,
    seasonality: SeasonalityTable,
}

impl MemoryCatalog {
    /// Create a catalog from destinations with no seasonality data.
    pub fn with_destinations<I>(destinations: I) -> Self
    where
        I: IntoIterator<Item = Destination>,
    {
        Self {
            destinations: destinations.into_iter().collect(),
            seasonality: SeasonalityTable::new(),
        }
    }

    /// Add seasonality records for `destination_id`.
    #[must_use]
    pub fn with_seasonality(
        mut self,
        destination_id: impl Into<String>,
        records: DestinationSeasonality,
    ) -> Self {
        self.seasonality.insert(destination_id, records);
        self
    }

    /// Append a destination.
    pub fn push(&mut self, destination: Destination) {
        self.destinations.push(destination);
    }
}

impl DestinationCatalog for MemoryCatalog {
    fn lookup_destinations(
        &self,
        _origin: &str,
    ) -> Box<dyn Iterator<Item = Destination> + Send + '_> {
        Box::new(self.destinations.iter().cloned())
    }
}

impl SeasonalitySource for MemoryCatalog {
    fn destination_seasonality(&self, destination_id: &str) -> Option<&DestinationSeasonality> {
        self.seasonality.destination_seasonality(destination_id)
    }
}

/// Enricher returning canned lines or a canned error.
#[derive(Debug, Clone)]
pub struct StubEnricher {
    enabled: bool,
    outcome: Result<Vec<String>, EnrichmentError>,
}

impl StubEnricher {
    /// Enabled enricher that returns `lines` for every request.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: true,
            outcome: Ok(lines.into_iter().map(Into::into).collect()),
        }
    }

    /// Enabled enricher that fails every request with `error`.
    pub const fn failing(error: EnrichmentError) -> Self {
        Self {
            enabled: true,
            outcome: Err(error),
        }
    }

    /// Disabled enricher; any request is an error.
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            outcome: Err(EnrichmentError::Disabled),
        }
    }
}

impl ExplanationEnricher for StubEnricher {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn generate_explanations(
        &self,
        _recommendations: &[Recommendation],
        _context: &EnrichmentContext,
    ) -> Result<Vec<String>, EnrichmentError> {
        self.outcome.clone()
    }
}
