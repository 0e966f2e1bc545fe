use camino::Utf8PathBuf;
use offpeak_core::{DestinationError, Month, SeasonalityRecordError};
use thiserror::Error;

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the catalog file failed.
    #[error("failed to read catalog at {path}")]
    Read {
        /// Requested catalog path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The catalog was not valid JSON for the expected layout.
    #[error("failed to decode catalog JSON")]
    Decode {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// No default region was marked, or more than one was.
    #[error("catalog must mark exactly one default region, found {count}")]
    DefaultRegion {
        /// Number of regions marked as default.
        count: usize,
    },
    /// A destination failed validation.
    #[error("destination {id} in region {region} is invalid")]
    InvalidDestination {
        /// Region containing the destination.
        region: String,
        /// Identifier of the destination.
        id: String,
        /// Validation failure.
        #[source]
        source: DestinationError,
    },
    /// A destination identifier was repeated inside a region.
    #[error("destination {id} appears more than once in region {region}")]
    DuplicateDestination {
        /// Region containing the duplicate.
        region: String,
        /// Repeated identifier.
        id: String,
    },
    /// A seasonality record was out of range.
    #[error("seasonality for {id} ({}) is invalid", .month.map_or("default", Month::as_str))]
    InvalidSeasonality {
        /// Destination the record belongs to.
        id: String,
        /// Month of the record, or `None` for the destination default.
        month: Option<Month>,
        /// Validation failure.
        #[source]
        source: SeasonalityRecordError,
    },
    /// The top-level shared default record was out of range.
    #[error("shared default seasonality is invalid")]
    InvalidSharedDefault {
        /// Validation failure.
        #[source]
        source: SeasonalityRecordError,
    },
}
