use almanac_calendar::calendar::{CalendarAdapter, CalendarSystem, calendar_systems};
use salvo::{Router, handler, writing::Json};
use serde::Serialize;

/// ## Summary
/// One supported calendar and its fixed names.
#[derive(Debug, Serialize)]
pub struct SystemInfo {
    pub system: CalendarSystem,
    pub name: &'static str,
    pub weekday_names: [&'static str; 7],
    pub month_names: Vec<&'static str>,
}

/// ## Summary
/// GET /api/calendar/systems - Lists every supported calendar system
#[handler]
async fn list_systems() -> Json<Vec<SystemInfo>> {
    Json(
        calendar_systems()
            .into_iter()
            .map(|(system, calendar)| SystemInfo {
                system,
                name: calendar.name(),
                weekday_names: calendar.weekday_names(),
                month_names: calendar.month_names(1),
            })
            .collect(),
    )
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("systems").get(list_systems)
}
