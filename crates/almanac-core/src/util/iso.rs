//! ISO-8601 date parsing shared by events and formatters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{CoreError, CoreResult};

/// Parses an ISO-8601 calendar date or RFC 3339 timestamp into a civil date.
///
/// Accepts `YYYY-MM-DD` or a full timestamp such as
/// `2024-01-01T09:30:00+02:00`, whose date is taken in UTC.
///
/// ## Errors
/// Returns `CoreError::ParseError` if the value matches neither form.
pub fn parse_iso_date(value: &str) -> CoreResult<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = value.parse::<NaiveDate>() {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc).date_naive())
        .map_err(|e| CoreError::ParseError(format!("invalid ISO-8601 date {value:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_date() {
        assert_eq!(
            parse_iso_date("2024-01-01").ok(),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(
            parse_iso_date(" 1999-12-31\n").ok(),
            NaiveDate::from_ymd_opt(1999, 12, 31)
        );
    }

    #[test]
    fn test_timestamp_uses_utc_date() {
        assert_eq!(
            parse_iso_date("2024-01-01T01:30:00+03:00").ok(),
            NaiveDate::from_ymd_opt(2023, 12, 31)
        );
        assert_eq!(
            parse_iso_date("2024-03-11T00:00:00Z").ok(),
            NaiveDate::from_ymd_opt(2024, 3, 11)
        );
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let err = parse_iso_date("next tuesday").unwrap_err();
        assert!(matches!(err, CoreError::ParseError(_)));
    }

    #[test]
    fn test_impossible_day_is_parse_error() {
        assert!(parse_iso_date("2023-02-29").is_err());
    }
}
