use camino::Utf8Path;
use offpeak_core::{
    Destination, DestinationCatalog, DestinationSeasonality, SeasonalityRecord, SeasonalitySource,
    SeasonalityTable,
};
use serde::Deserialize;

use super::{CatalogError, Region};

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDocument {
    regions: Vec<Region>,
    #[serde(default)]
    shared_default: Option<SeasonalityRecord>,
    #[serde(default)]
    seasonality: SeasonalityTable,
}

/// Immutable catalog of regions and seasonality loaded at start-up.
///
/// Origins are matched against each non-default region's keywords in
/// catalog order; the first match wins and unmatched origins receive the
/// default region.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    regions: Vec<Region>,
    fallback: Region,
    seasonality: SeasonalityTable,
}

impl StaticCatalog {
    /// Load the catalog bundled with this crate.
    ///
    /// # Errors
    /// Returns [`CatalogError`] if the bundled data is malformed.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    /// Returns [`CatalogError::Read`] when the file cannot be read and the
    /// errors of [`StaticCatalog::from_json`] otherwise.
    pub fn from_path(path: &Utf8Path) -> Result<Self, CatalogError> {
        let json = offpeak_fs::read_utf8_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded catalog from {path}");
        Self::from_json(&json)
    }

    /// Parse and validate a catalog document.
    ///
    /// A top-level `sharedDefault` record, when present, becomes the default
    /// of every listed destination that lacks its own.
    ///
    /// # Errors
    /// Returns [`CatalogError`] for invalid JSON, a missing or repeated
    /// default region, destinations that fail validation, or seasonality
    /// records outside their ranges.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|source| CatalogError::Decode { source })?;
        for region in &document.regions {
            region.validate()?;
        }

        let (mut defaults, regions): (Vec<_>, Vec<_>) =
            document.regions.into_iter().partition(|region| region.default);
        let count = defaults.len();
        let fallback = match defaults.pop() {
            Some(region) if count == 1 => region,
            _ => return Err(CatalogError::DefaultRegion { count }),
        };

        for (id, records) in document.seasonality.iter() {
            records
                .validate()
                .map_err(|(month, source)| CatalogError::InvalidSeasonality {
                    id: id.to_owned(),
                    month,
                    source,
                })?;
        }

        let mut seasonality = document.seasonality;
        if let Some(shared) = &document.shared_default {
            shared
                .validate()
                .map_err(|source| CatalogError::InvalidSharedDefault { source })?;
            seasonality.fill_missing_defaults(shared);
        }

        Ok(Self {
            regions,
            fallback,
            seasonality,
        })
    }

    /// Region serving travellers from `origin`.
    #[must_use]
    pub fn region_for(&self, origin: &str) -> &Region {
        self.regions
            .iter()
            .find(|region| region.matches_origin(origin))
            .unwrap_or(&self.fallback)
    }

    /// All regions, with the default region last.
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter().chain(std::iter::once(&self.fallback))
    }

    /// Seasonality table shipped with the catalog.
    #[must_use]
    pub const fn seasonality(&self) -> &SeasonalityTable {
        &self.seasonality
    }
}

impl DestinationCatalog for StaticCatalog {
    fn lookup_destinations(
        &self,
        origin: &str,
    ) -> Box<dyn Iterator<Item = Destination> + Send + '_> {
        let region = self.region_for(origin);
        log::debug!("origin {origin:?} served by region {}", region.id);
        Box::new(region.destinations.iter().cloned())
    }
}

impl SeasonalitySource for StaticCatalog {
    fn destination_seasonality(&self, destination_id: &str) -> Option<&DestinationSeasonality> {
        self.seasonality.destination_seasonality(destination_id)
    }
}
