//! Display helpers shared by the views

use crate::domain::Message;
use chrono::{DateTime, Duration, TimeZone};
use std::fmt::Display;

/// Cells in a rendered progress bar
pub const BAR_CELLS: usize = 20;

/// Spacing between synthesized message times
const SYNTHETIC_INTERVAL_MINUTES: i64 = 5;

/// Width of the usage bar in percent, clamped into `[0, 100]`
///
/// The underlying ratio is never clamped; only what gets drawn is.
pub fn progress_width(ratio: Option<f64>) -> Option<f64> {
    ratio.map(|r| (r * 100.0).clamp(0.0, 100.0))
}

/// Rounds to `decimals` places with ties going away from zero
///
/// `format!` alone rounds ties to even, so 12.5 would print as "12".
fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// `"45.0%"` style label, `"N/A"` when usage is undefined
pub fn usage_label(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:.1}%", round_half_up(r * 100.0, 1)),
        None => "N/A".to_string(),
    }
}

/// Whole-number percentage, `"N/A"` when undefined
pub fn percent_label(percent: Option<f64>) -> String {
    match percent {
        Some(p) => format!("{:.0}%", round_half_up(p, 0)),
        None => "N/A".to_string(),
    }
}

/// Text progress bar for a clamped width
pub fn progress_bar(width: Option<f64>) -> String {
    let filled = width
        .map(|w| ((w / 100.0) * BAR_CELLS as f64).round() as usize)
        .unwrap_or(0)
        .min(BAR_CELLS);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

/// `HH:MM` shown next to a message
///
/// Uses the recorded timestamp when it parses as RFC 3339. Otherwise the
/// time is made up as `now - index * 5min`; that value is a presentation
/// artifact and carries no information.
pub fn display_time<Tz>(message: &Message, index: usize, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let recorded = message
        .timestamp
        .as_deref()
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok());

    match recorded {
        Some(ts) => ts.with_timezone(&now.timezone()).format("%H:%M").to_string(),
        None => {
            let offset = Duration::minutes(SYNTHETIC_INTERVAL_MINUTES * index as i64);
            (now.clone() - offset).format("%H:%M").to_string()
        }
    }
}
