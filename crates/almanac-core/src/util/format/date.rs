use crate::util::iso::parse_iso_date;

/// Formats an ISO-8601 date the British way, e.g. "02 January 2024".
///
/// Returns "Unknown Date" when no date is given and "Invalid Date" when the
/// value cannot be parsed.
#[must_use]
pub fn format_date(date: Option<&str>) -> String {
    let Some(date) = date.filter(|value| !value.is_empty()) else {
        return "Unknown Date".to_string();
    };

    match parse_iso_date(date) {
        Ok(parsed) => parsed.format("%d %B %Y").to_string(),
        Err(e) => {
            tracing::trace!(error = %e, "Cannot format date");
            "Invalid Date".to_string()
        }
    }
}
