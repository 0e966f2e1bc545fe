//! Recommend command implementation for the off-peak CLI.

use std::io::Write;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use offpeak_core::{
    EnrichmentContext, ExplanationEnricher, PreferencesRequest, Recommendation, UserPreferences,
};
use offpeak_data::StaticCatalog;
use offpeak_data::enrich::{HttpEnricher, HttpEnricherConfig};
use offpeak_scorer::{RecommendationEngine, enrich_recommendations};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATALOG, ARG_CROWD_TOLERANCE, ARG_ENRICHMENT_API_KEY, ARG_ENRICHMENT_BASE_URL,
    ARG_ENRICHMENT_MODEL, ARG_ENRICHMENT_TIMEOUT_SECS, ARG_FLEX_WEEKS, ARG_MONTH, ARG_ORIGIN,
    ARG_TRIP_LENGTH, ARG_WEATHER_TOLERANCE, CliError, ENV_MONTH, ENV_OPENAI_API_KEY, ENV_ORIGIN,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank destinations reachable from an origin by how much \
                 value an off-peak trip in the given month offers. Options \
                 can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Recommend off-peak destinations"
)]
#[ortho_config(prefix = "OFFPEAK")]
pub(crate) struct RecommendArgs {
    /// Where the traveller departs from, e.g. "London".
    #[arg(long = ARG_ORIGIN, value_name = "text")]
    #[serde(default)]
    pub(crate) origin: Option<String>,
    /// Travel month, e.g. "September" or "Sep".
    #[arg(long = ARG_MONTH, value_name = "name")]
    #[serde(default)]
    pub(crate) month: Option<String>,
    /// Date flexibility in weeks.
    #[arg(long = ARG_FLEX_WEEKS, value_name = "weeks")]
    #[serde(default)]
    pub(crate) flex_weeks: Option<u8>,
    /// Trip length in nights.
    #[arg(long = ARG_TRIP_LENGTH, value_name = "nights")]
    #[serde(default)]
    pub(crate) trip_length: Option<u16>,
    /// Weather risk tolerance between 0 and 1.
    #[arg(long = ARG_WEATHER_TOLERANCE, value_name = "fraction")]
    #[serde(default)]
    pub(crate) weather_tolerance: Option<f64>,
    /// Crowd tolerance between 0 and 1.
    #[arg(long = ARG_CROWD_TOLERANCE, value_name = "fraction")]
    #[serde(default)]
    pub(crate) crowd_tolerance: Option<f64>,
    /// Path to a catalog JSON file replacing the bundled data.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// API key for explanation enrichment; enrichment is off without one.
    #[arg(long = ARG_ENRICHMENT_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) enrichment_api_key: Option<String>,
    /// Base URL of the chat-completions API.
    #[arg(long = ARG_ENRICHMENT_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) enrichment_base_url: Option<String>,
    /// Chat model used for enrichment.
    #[arg(long = ARG_ENRICHMENT_MODEL, value_name = "name")]
    #[serde(default)]
    pub(crate) enrichment_model: Option<String>,
    /// Enrichment request timeout in seconds.
    #[arg(long = ARG_ENRICHMENT_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub(crate) enrichment_timeout_secs: Option<u64>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let mut merged = self.load_and_merge().map_err(CliError::Configuration)?;
        if merged.enrichment_api_key.is_none() {
            merged.enrichment_api_key = std::env::var(ENV_OPENAI_API_KEY).ok();
        }
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone)]
pub(crate) struct RecommendConfig {
    /// Validated traveller preferences.
    pub(crate) preferences: UserPreferences,
    /// Optional catalog file replacing the bundled data.
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Enrichment client settings.
    pub(crate) enrichment: HttpEnricherConfig,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match &self.catalog {
            Some(path) => Self::require_existing(path, ARG_CATALOG),
            None => Ok(()),
        }
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match offpeak_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let origin = args.origin.ok_or(CliError::MissingArgument {
            field: ARG_ORIGIN,
            env: ENV_ORIGIN,
        })?;
        let month = args.month.ok_or(CliError::MissingArgument {
            field: ARG_MONTH,
            env: ENV_MONTH,
        })?;
        let preferences = UserPreferences::try_from(PreferencesRequest {
            origin: Some(origin),
            month: Some(month),
            flex_weeks: args.flex_weeks,
            trip_length: args.trip_length,
            weather_tolerance: args.weather_tolerance,
            crowd_tolerance: args.crowd_tolerance,
        })?;

        let mut enrichment = HttpEnricherConfig::new(args.enrichment_api_key);
        if let Some(base_url) = args.enrichment_base_url {
            enrichment = enrichment.with_base_url(base_url);
        }
        if let Some(model) = args.enrichment_model {
            enrichment = enrichment.with_model(model);
        }
        if let Some(secs) = args.enrichment_timeout_secs {
            enrichment = enrichment.with_timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            preferences,
            catalog: args.catalog,
            enrichment,
        })
    }
}

/// JSON document written by the `recommend` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RecommendReport {
    pub(crate) origin: String,
    pub(crate) month: String,
    pub(crate) destinations: Vec<Recommendation>,
}

/// Builds the collaborators for the current recommend invocation.
pub(super) trait RecommendServicesBuilder {
    fn catalog(&self, config: &RecommendConfig) -> Result<StaticCatalog, CliError>;

    fn enricher(
        &self,
        config: &RecommendConfig,
    ) -> Result<Box<dyn ExplanationEnricher>, CliError>;
}

pub(super) struct DefaultRecommendServicesBuilder;

impl RecommendServicesBuilder for DefaultRecommendServicesBuilder {
    fn catalog(&self, config: &RecommendConfig) -> Result<StaticCatalog, CliError> {
        let catalog = match &config.catalog {
            Some(path) => StaticCatalog::from_path(path)?,
            None => StaticCatalog::builtin()?,
        };
        Ok(catalog)
    }

    fn enricher(
        &self,
        config: &RecommendConfig,
    ) -> Result<Box<dyn ExplanationEnricher>, CliError> {
        let enricher =
            HttpEnricher::with_config(config.enrichment.clone()).map_err(CliError::BuildEnricher)?;
        Ok(Box::new(enricher))
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultRecommendServicesBuilder;
    run_recommend_with(args, &builder, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn RecommendServicesBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let report = execute_recommend(&config, builder)?;
    write_report(writer, &report)
}

pub(super) fn execute_recommend(
    config: &RecommendConfig,
    builder: &dyn RecommendServicesBuilder,
) -> Result<RecommendReport, CliError> {
    let catalog = builder.catalog(config)?;
    let enricher = builder.enricher(config)?;
    let preferences = &config.preferences;

    let ranked = RecommendationEngine::new(&catalog, &catalog).recommend(preferences)?;
    log::info!(
        "ranked {} destinations for {} in {}",
        ranked.len(),
        preferences.origin(),
        preferences.month_label()
    );
    let destinations = enrich_recommendations(
        &*enricher,
        ranked,
        &EnrichmentContext::from(preferences),
    );

    Ok(RecommendReport {
        origin: preferences.origin().to_owned(),
        month: preferences.month_label().to_owned(),
        destinations,
    })
}

fn write_report(writer: &mut dyn Write, report: &RecommendReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerializeReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
