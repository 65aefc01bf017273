use almanac_calendar::calendar::{
    CalendarEvent, CalendarSystem, DayView, MonthCursor, MonthGrid, WeekView, calendar_for,
};
use salvo::{Depot, Request, Response, Router, handler, writing::Json};

use super::super::params::{date_query, events_body, query_value, system_param};
use super::super::response::render_error;
use crate::config::get_config_from_depot;
use crate::error::AppResult;

fn month(req: &Request, depot: &Depot, events: &[CalendarEvent]) -> AppResult<MonthGrid> {
    let system = system_param(req)?;
    let today = get_config_from_depot(depot)?.calendar.today()?;

    let current = MonthCursor::containing(&calendar_for(system), today);
    let cursor = MonthCursor::new(
        query_value(req, "year")?.unwrap_or(current.year),
        query_value(req, "month")?.unwrap_or(current.month),
    );

    Ok(MonthGrid::build(system, cursor, today, events)?)
}

async fn week(req: &mut Request, depot: &Depot) -> AppResult<WeekView> {
    let settings = get_config_from_depot(depot)?;
    let today = settings.calendar.today()?;
    let system = query_value::<CalendarSystem>(req, "system")?.unwrap_or(settings.calendar.system);
    let date = date_query(req, "date")?.unwrap_or(today);
    let events = events_body(req).await?;

    Ok(WeekView::build(system, date, today, &events)?)
}

async fn day(req: &mut Request, depot: &Depot) -> AppResult<DayView> {
    let date = match date_query(req, "date")? {
        Some(date) => date,
        None => get_config_from_depot(depot)?.calendar.today()?,
    };
    let events = events_body(req).await?;

    Ok(DayView::build(date, &events))
}

/// ## Summary
/// GET /api/calendar/{system}/month?year=&month= - Month grid without events
///
/// Missing year or month default to the month containing today.
///
/// ## Errors
/// Returns HTTP 400 for a month the calendar does not have
/// Returns HTTP 404 for an unknown system
#[handler]
async fn month_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match month(req, depot, &[]) {
        Ok(body) => res.render(Json(body)),
        Err(e) => render_error(res, &e),
    }
}

/// ## Summary
/// POST /api/calendar/{system}/month?year=&month= - Month grid with the
/// posted events attached to their days
///
/// ## Errors
/// Returns HTTP 400 if the body is not a list of events
#[handler]
async fn month_with_events_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let result = match events_body(req).await {
        Ok(events) => month(req, depot, &events),
        Err(e) => Err(e),
    };
    match result {
        Ok(body) => res.render(Json(body)),
        Err(e) => render_error(res, &e),
    }
}

/// ## Summary
/// POST /api/calendar/week?date=&system= - Sunday-started week around `date`
///
/// Defaults to today and the configured calendar system.
#[handler]
async fn week_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match week(req, depot).await {
        Ok(body) => res.render(Json(body)),
        Err(e) => render_error(res, &e),
    }
}

/// ## Summary
/// POST /api/calendar/day?date= - Posted events falling on `date`
#[handler]
async fn day_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match day(req, depot).await {
        Ok(body) => res.render(Json(body)),
        Err(e) => render_error(res, &e),
    }
}

/// Routes that do not take a calendar system in the path.
#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(Router::with_path("week").post(week_handler))
        .push(Router::with_path("day").post(day_handler))
}

/// Routes under `/{system}`.
#[must_use]
pub fn system_routes() -> Router {
    Router::with_path("month")
        .get(month_handler)
        .post(month_with_events_handler)
}
