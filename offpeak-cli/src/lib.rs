//! Command-line interface for the off-peak travel recommendation engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod recommend;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};

pub(crate) const ARG_ORIGIN: &str = "origin";
pub(crate) const ARG_MONTH: &str = "month";
pub(crate) const ARG_FLEX_WEEKS: &str = "flex-weeks";
pub(crate) const ARG_TRIP_LENGTH: &str = "trip-length";
pub(crate) const ARG_WEATHER_TOLERANCE: &str = "weather-tolerance";
pub(crate) const ARG_CROWD_TOLERANCE: &str = "crowd-tolerance";
pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_ENRICHMENT_API_KEY: &str = "enrichment-api-key";
pub(crate) const ARG_ENRICHMENT_BASE_URL: &str = "enrichment-base-url";
pub(crate) const ARG_ENRICHMENT_MODEL: &str = "enrichment-model";
pub(crate) const ARG_ENRICHMENT_TIMEOUT_SECS: &str = "enrichment-timeout-secs";
pub(crate) const ENV_ORIGIN: &str = "OFFPEAK_CMDS_RECOMMEND_ORIGIN";
pub(crate) const ENV_MONTH: &str = "OFFPEAK_CMDS_RECOMMEND_MONTH";
/// Conventional variable consulted when no enrichment key is configured.
pub(crate) const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// catalog cannot be loaded, scoring fails, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "offpeak",
    about = "Rank off-peak travel windows by value",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend destinations for an origin and travel month.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
