use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::util::iso::parse_iso_date;

/// How precisely an estimated date is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePrecision {
    Exact,
    Year,
    Decade,
    Century,
    Millennium,
    Unknown,
}

/// A possibly uncertain date attached to a historical event or work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateEstimate {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub date_known: Option<bool>,
    /// ISO-8601 date, meaningful when `date_known` is set.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub date_estimate_start: Option<i32>,
    #[serde(default)]
    pub date_estimate_end: Option<i32>,
    #[serde(default)]
    pub date_precision: Option<DatePrecision>,
}

/// Formats a [`DateEstimate`] for display.
///
/// Known dates render as their year ("1066 AD"). Estimates render according to
/// their precision ("c. 1950s AD", "c. 5th Century BC"), falling back to a
/// range ("c. 1200 AD–1300 AD") or "Date Unknown". Year zero does not exist in
/// the BC/AD reckoning and is treated as absent.
#[must_use]
pub fn format_date_estimate(estimate: Option<&DateEstimate>) -> String {
    let Some(estimate) = estimate else {
        return String::new();
    };

    let start = estimate.date_estimate_start.filter(|year| *year != 0);
    let end = estimate.date_estimate_end.filter(|year| *year != 0);
    let date_known = estimate.date_known.unwrap_or(false);

    if date_known {
        let known_year = estimate
            .date
            .as_deref()
            .and_then(|date| parse_iso_date(date).ok())
            .map(|date| date.year());
        if let Some(year) = known_year {
            return format_year(year);
        }
        tracing::trace!(date = ?estimate.date, "Known date missing or unparseable");
    } else {
        return match estimate.date_precision {
            Some(DatePrecision::Year) => start.map_or_else(
                || "c. Unknown Year".to_string(),
                |year| format!("c. {}", format_year(year)),
            ),
            Some(DatePrecision::Decade) => start.map_or_else(
                || "c. Unknown Decade".to_string(),
                |year| format!("c. {}s {}", year.unsigned_abs() / 10 * 10, era(year)),
            ),
            Some(DatePrecision::Century) => start.map_or_else(
                || "c. Unknown Century".to_string(),
                |year| format!("c. {}", format_span(year, 100, "Century")),
            ),
            Some(DatePrecision::Millennium) => start.map_or_else(
                || "c. Unknown Millennium".to_string(),
                |year| format!("c. {}", format_span(year, 1000, "Millennium")),
            ),
            Some(DatePrecision::Exact | DatePrecision::Unknown) | None => format_range(start, end),
        };
    }

    format_range(start, end)
}

fn format_range(start: Option<i32>, end: Option<i32>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => format!("c. {}–{}", format_year(start), format_year(end)),
        _ => "Date Unknown".to_string(),
    }
}

fn format_year(year: i32) -> String {
    format!("{} {}", year.unsigned_abs(), era(year))
}

fn era(year: i32) -> &'static str {
    if year < 0 { "BC" } else { "AD" }
}

/// Renders the ordinal century or millennium containing `year`.
fn format_span(year: i32, span: u32, label: &str) -> String {
    let ordinal = year.unsigned_abs().div_ceil(span);
    format!("{ordinal}{} {label} {}", ordinal_suffix(ordinal), era(year))
}

fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (1, tens) if tens != 11 => "st",
        (2, tens) if tens != 12 => "nd",
        (3, tens) if tens != 13 => "rd",
        _ => "th",
    }
}
