//! Error types emitted by the off-peak CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use offpeak_core::PreferencesError;
use offpeak_data::CatalogError;
use offpeak_data::enrich::EnricherBuildError;
use offpeak_scorer::ScoreError;
use thiserror::Error;

/// Errors emitted by the off-peak CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// Traveller preferences failed validation.
    #[error("invalid preferences: {0}")]
    InvalidPreferences(#[from] PreferencesError),
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Flag naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Loading the destination catalog failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Constructing the enrichment client failed.
    #[error("failed to build enrichment client: {0}")]
    BuildEnricher(#[source] EnricherBuildError),
    /// A destination could not be scored.
    #[error("scoring failed: {0}")]
    Score(#[from] ScoreError),
    /// Serializing the recommendations failed.
    #[error("failed to serialize recommendations: {0}")]
    SerializeReport(#[source] serde_json::Error),
    /// Writing the recommendations failed.
    #[error("failed to write recommendations: {0}")]
    WriteOutput(#[source] std::io::Error),
}
