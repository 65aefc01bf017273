//! Path, query and body extraction shared by the handlers.

use std::fmt::Display;
use std::str::FromStr;

use almanac_calendar::calendar::{CalendarEvent, CalendarSystem};
use almanac_core::util::iso::parse_iso_date;
use chrono::NaiveDate;
use salvo::Request;

use crate::error::{AppError, AppResult};

/// ## Summary
/// Reads the `{system}` path segment.
///
/// ## Errors
/// Returns `AppError::UnknownSystem` if it names no supported calendar.
pub(crate) fn system_param(req: &Request) -> AppResult<CalendarSystem> {
    let name = req
        .param::<String>("system")
        .ok_or_else(|| AppError::BadRequest("missing calendar system".to_owned()))?;
    name.parse::<CalendarSystem>()
        .map_err(|_err| AppError::UnknownSystem(name))
}

/// ## Summary
/// Reads and parses an optional query parameter.
///
/// ## Errors
/// Returns `AppError::BadRequest` if the parameter is present but does not
/// parse.
pub(crate) fn query_value<T>(req: &Request, name: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    req.query::<String>(name)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| AppError::BadRequest(format!("{name}: {e}")))
        })
        .transpose()
}

/// ## Summary
/// Reads a query parameter that must be present.
///
/// ## Errors
/// Returns `AppError::BadRequest` if it is missing or does not parse.
pub(crate) fn required_query<T>(req: &Request, name: &str) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    query_value(req, name)?
        .ok_or_else(|| AppError::BadRequest(format!("missing query parameter {name}")))
}

/// ## Summary
/// Reads an optional ISO-8601 date query parameter.
///
/// ## Errors
/// Returns `AppError::CoreError` (400) if the value is not a date.
pub(crate) fn date_query(req: &Request, name: &str) -> AppResult<Option<NaiveDate>> {
    Ok(req
        .query::<String>(name)
        .map(|raw| parse_iso_date(&raw))
        .transpose()?)
}

/// ## Summary
/// Reads a JSON array of events from the request body.
///
/// ## Errors
/// Returns `AppError::BadRequest` if the body is not a list of events.
pub(crate) async fn events_body(req: &mut Request) -> AppResult<Vec<CalendarEvent>> {
    req.parse_json::<Vec<CalendarEvent>>()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))
}
