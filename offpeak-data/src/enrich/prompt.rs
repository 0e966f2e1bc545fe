//! Prompt construction and reply parsing.

use offpeak_core::{EnrichmentContext, Recommendation};

/// System prompt sent with every enrichment request.
pub const SYSTEM_PROMPT: &str = "You are a travel intelligence assistant. Provide concise, \
    insightful explanations for why specific travel windows offer great value. Focus on \
    seasonality, local events, and market dynamics. Keep each explanation under 30 words.";

/// Build the user prompt listing each recommendation on a numbered line.
///
/// # Examples
/// ```
/// use offpeak_core::{EnrichmentContext, UserPreferences};
/// use offpeak_data::enrich::build_user_prompt;
///
/// # fn main() -> Result<(), offpeak_core::PreferencesError> {
/// let context = EnrichmentContext::from(&UserPreferences::new("London", "May")?);
/// let prompt = build_user_prompt(&[], &context);
/// assert!(prompt.contains("great value in May"));
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn build_user_prompt(recommendations: &[Recommendation], context: &EnrichmentContext) -> String {
    let month = &context.month;
    let list: String = (1_usize..)
        .zip(recommendations)
        .map(|(position, recommendation)| {
            format!(
                "{position}. {} - {} ({}% savings in {month})\n",
                recommendation.destination, recommendation.location, recommendation.savings_percent
            )
        })
        .collect();
    format!(
        "Generate brief explanations for why these destinations offer great value in {month}:\n\n\
         {list}\n\
         For each destination, explain in one concise sentence (max 30 words) why this specific \
         time offers good value, considering seasonality, weather patterns, or local factors.\n\n\
         Format: Just list the explanations numbered 1-{}, one per line.",
        recommendations.len()
    )
}

/// Split a reply into explanation lines.
///
/// Blank lines are dropped and a leading `N.` list marker is removed.
#[must_use]
pub fn parse_explanations(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| strip_numbering(line).to_owned())
        .collect()
}

fn strip_numbering(line: &str) -> &str {
    let rest = line.trim_start_matches(|ch: char| ch.is_ascii_digit());
    if rest.len() == line.len() {
        return line;
    }
    rest.strip_prefix('.').map_or(line, str::trim_start)
}
