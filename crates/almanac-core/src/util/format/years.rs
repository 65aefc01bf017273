/// Formats a year range for period headers.
///
/// When both years have four or more digits the era markers are dropped.
///
/// Examples:
/// - `(100, 200)` -> "100 A.D. - 200 A.D."
/// - `(-100, 100)` -> "100 B.C. - 100 A.D."
/// - `(1914, 1918)` -> "1914 - 1918"
#[must_use]
pub fn format_years(start: i32, end: i32) -> String {
    if start > 999 && end > 999 {
        return format!("{start} - {end}");
    }

    format!("{} - {}", format_single_year(start), format_single_year(end))
}

fn format_single_year(year: i32) -> String {
    if year < 0 {
        format!("{} B.C.", year.unsigned_abs())
    } else {
        format!("{year} A.D.")
    }
}
