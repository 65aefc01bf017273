use almanac_calendar::calendar::{CalendarAdapter, CalendarDate, CalendarSystem, calendar_for};
use chrono::NaiveDate;
use salvo::{Depot, Request, Response, Router, handler, writing::Json};
use serde::Serialize;

use super::super::params::{date_query, required_query, system_param};
use super::super::response::render_error;
use crate::config::get_config_from_depot;
use crate::error::{AppError, AppResult};

/// ## Summary
/// A Gregorian day expressed in one calendar system.
#[derive(Debug, Serialize)]
pub struct ConvertedDate {
    pub system: CalendarSystem,
    pub gregorian: NaiveDate,
    pub date: CalendarDate,
    pub month_name: &'static str,
}

impl ConvertedDate {
    fn new(system: CalendarSystem, gregorian: NaiveDate) -> Self {
        let calendar = calendar_for(system);
        let date = calendar.convert_from_gregorian(gregorian);
        tracing::trace!(%system, %gregorian, ?date, "Converted from Gregorian");
        Self {
            system,
            gregorian,
            date,
            month_name: calendar.month_name(date.month),
        }
    }
}

/// ## Summary
/// Response for conversions into the Gregorian calendar
#[derive(Debug, Serialize)]
pub struct GregorianResponse {
    pub system: CalendarSystem,
    pub date: NaiveDate,
}

fn today(req: &Request, depot: &Depot) -> AppResult<ConvertedDate> {
    let system = system_param(req)?;
    let settings = get_config_from_depot(depot)?;
    Ok(ConvertedDate::new(system, settings.calendar.today()?))
}

fn from_gregorian(req: &Request) -> AppResult<ConvertedDate> {
    let system = system_param(req)?;
    let date = date_query(req, "date")?
        .ok_or_else(|| AppError::BadRequest("missing query parameter date".to_owned()))?;
    Ok(ConvertedDate::new(system, date))
}

fn to_gregorian(req: &Request) -> AppResult<GregorianResponse> {
    let system = system_param(req)?;
    let date = CalendarDate::new(
        required_query(req, "year")?,
        required_query(req, "month")?,
        required_query(req, "day")?,
    );
    let gregorian = calendar_for(system).convert_to_gregorian(date)?;
    tracing::trace!(%system, ?date, %gregorian, "Converted to Gregorian");
    Ok(GregorianResponse {
        system,
        date: gregorian,
    })
}

/// ## Summary
/// GET /api/calendar/{system}/today - Today in the configured timezone
///
/// ## Errors
/// Returns HTTP 404 for an unknown system
/// Returns HTTP 500 if the configuration is missing
#[handler]
async fn today_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match today(req, depot) {
        Ok(body) => res.render(Json(body)),
        Err(e) => render_error(res, &e),
    }
}

/// ## Summary
/// GET /api/calendar/{system}/from-gregorian?date=YYYY-MM-DD
///
/// ## Errors
/// Returns HTTP 400 if the date is missing or malformed
/// Returns HTTP 404 for an unknown system
#[handler]
async fn from_gregorian_handler(req: &mut Request, res: &mut Response) {
    match from_gregorian(req) {
        Ok(body) => res.render(Json(body)),
        Err(e) => render_error(res, &e),
    }
}

/// ## Summary
/// GET /api/calendar/{system}/to-gregorian?year=&month=&day=
///
/// Month and day are not range checked; they roll over the way the
/// calendar's arithmetic does.
///
/// ## Errors
/// Returns HTTP 400 if a component is missing or not a number
/// Returns HTTP 404 for an unknown system
/// Returns HTTP 422 if the result is outside the representable range
#[handler]
async fn to_gregorian_handler(req: &mut Request, res: &mut Response) {
    match to_gregorian(req) {
        Ok(body) => res.render(Json(body)),
        Err(e) => render_error(res, &e),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(Router::with_path("today").get(today_handler))
        .push(Router::with_path("from-gregorian").get(from_gregorian_handler))
        .push(Router::with_path("to-gregorian").get(to_gregorian_handler))
}
