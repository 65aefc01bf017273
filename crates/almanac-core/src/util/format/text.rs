/// Turns a stored category key into a display label.
///
/// Underscores separate alternatives and become " & "; every word is
/// capitalised.
///
/// Examples:
/// - "film_television" -> "Film & Television"
/// - "sheet MUSIC" -> "Sheet Music"
#[must_use]
pub fn format_phrase(phrase: &str) -> String {
    phrase
        .replace('_', " & ")
        .split(' ')
        .map(capitalise)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Formats an `H:M[:S]` runtime as whole minutes, e.g. "1:32:40" -> "93 mins".
///
/// Seconds are rounded to the nearest minute. Returns "Unknown runtime" when
/// the runtime is missing or not numeric.
#[must_use]
pub fn format_runtime(runtime: Option<&str>) -> String {
    const UNKNOWN: &str = "Unknown runtime";

    let Some(runtime) = runtime.filter(|value| !value.is_empty()) else {
        return UNKNOWN.to_string();
    };

    let parts = runtime
        .split(':')
        .map(|part| part.trim().parse::<u64>())
        .collect::<Result<Vec<_>, _>>();

    let total_minutes = match parts.as_deref() {
        Ok([hours, minutes]) => whole_minutes(*hours, *minutes, 0),
        Ok([hours, minutes, seconds]) => whole_minutes(*hours, *minutes, *seconds),
        _ => None,
    };

    let Some(total_minutes) = total_minutes else {
        tracing::trace!(runtime, "Malformed runtime");
        return UNKNOWN.to_string();
    };

    format!("{total_minutes} mins")
}

/// Total minutes with seconds rounded to the nearest minute, or `None` on
/// overflow.
fn whole_minutes(hours: u64, minutes: u64, seconds: u64) -> Option<u64> {
    let rounded_seconds = seconds.checked_add(30)? / 60;
    hours
        .checked_mul(60)
        .and_then(|total| total.checked_add(minutes))
        .and_then(|total| total.checked_add(rounded_seconds))
}
