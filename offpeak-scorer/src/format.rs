//! Presentation formatting for ranked destinations.
#![forbid(unsafe_code)]

use offpeak_core::{
    Destination, Recommendation, RiskLevel, ScoreResult, Season, TradeOffs, UserPreferences,
};

/// Currency symbol prefixed to formatted costs.
pub const CURRENCY_SYMBOL: &str = "€";

const WINDOW_START_DAY: u8 = 5;
const WINDOW_END_DAY: u8 = 22;
const OFF_PEAK_FALLBACK: &str = "Off-peak season lowers hotel demand while flights remain frequent.";
const PEAK_EXPLANATION: &str =
    "Even in peak season, this destination offers good value due to competitive market conditions.";

/// Round half away from zero to a whole number.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "inputs are finite costs and percentages well within i64 range"
)]
pub fn round_whole(value: f64) -> i64 {
    value.round() as i64
}

/// Render `amount` as a rounded currency string, e.g. `€1,180`.
///
/// # Examples
/// ```
/// use offpeak_scorer::format_currency;
///
/// assert_eq!(format_currency(1180.4), "€1,180");
/// assert_eq!(format_currency(980.5), "€981");
/// ```
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let rounded = round_whole(amount);
    let digits = rounded.unsigned_abs().to_string();
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{sign}{CURRENCY_SYMBOL}{}", group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len.saturating_mul(2));
    for (position, ch) in digits.chars().enumerate() {
        let remaining = len - position;
        if position > 0 && remaining.is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Suggested window inside the requested month, e.g. `5 Sep–22 Sep`.
///
/// Falls back to the raw month text when it did not parse.
#[must_use]
pub fn best_window(preferences: &UserPreferences) -> String {
    let month = preferences
        .month()
        .map_or(preferences.month_label(), |m| m.abbreviation());
    format!("{WINDOW_START_DAY} {month}–{WINDOW_END_DAY} {month}")
}

/// Bucket a rain probability.
#[must_use]
pub fn rain_risk_level(rain_risk: f64) -> RiskLevel {
    if rain_risk < 0.15 {
        RiskLevel::Low
    } else if rain_risk < 0.30 {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

/// Bucket a crowd level.
#[must_use]
pub fn crowd_level(level: f64) -> RiskLevel {
    if level < 0.3 {
        RiskLevel::Low
    } else if level < 0.6 {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

/// Rain risk phrased as a share of days.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "converting a probability to a percentage")]
pub fn rain_days(rain_risk: f64) -> String {
    format!("{}% of days", round_whole(rain_risk * 100.0))
}

/// Narrative explanation chosen by season.
///
/// Unrecognised seasons use the off-peak wording.
#[must_use]
pub fn explanation(season: &Season, reason: &str, savings_percent: i64) -> String {
    match season {
        Season::Shoulder => format!(
            "Shoulder season offers excellent balance: lower prices ({savings_percent}% off) \
             with still-pleasant conditions."
        ),
        Season::Peak => PEAK_EXPLANATION.to_owned(),
        Season::OffPeak | Season::Unrecognised(_) => {
            let lead = if reason.trim().is_empty() {
                OFF_PEAK_FALLBACK
            } else {
                reason.trim()
            };
            format!("{lead} Great value with {savings_percent}% savings.")
        }
    }
}

/// Build the presentation record for a scored destination.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "formatting derives percentages and seasonal costs"
)]
pub fn format_recommendation(
    destination: &Destination,
    score: &ScoreResult,
    preferences: &UserPreferences,
) -> Recommendation {
    let season = &score.season_data;
    let savings_percent = round_whole(score.raw_savings * 100.0);
    let off_peak_cost = destination.base_cost * season.price_multiplier;
    let reason = Some(season.reason.trim())
        .filter(|reason| !reason.is_empty())
        .or(destination.summary.as_deref())
        .unwrap_or_default();

    Recommendation {
        destination_id: destination.id.clone(),
        destination: destination.name.clone(),
        location: destination.location.clone(),
        best_window: best_window(preferences),
        savings_percent,
        estimated_cost: format_currency(off_peak_cost),
        peak_cost: format_currency(destination.peak_cost),
        trade_offs: TradeOffs {
            rain_risk: rain_risk_level(season.rain_risk),
            rain_days: rain_days(season.rain_risk),
            crowds: crowd_level(season.crowd_level),
            flight_reliability: season.flight_reliability.clone(),
        },
        explanation: explanation(&season.season, reason, savings_percent),
        value_score: score.adjusted_value,
        enriched: false,
    }
}
