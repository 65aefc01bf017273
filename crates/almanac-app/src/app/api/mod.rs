mod app_specific;
mod calendar;
mod format;
mod params;
mod response;

use salvo::Router;

// Re-export route constants from core
pub use almanac_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, APP_ROUTE_PREFIX, CALENDAR_ROUTE_PREFIX,
    FORMAT_ROUTE_PREFIX,
};
pub use response::{ErrorResponse, TextResponse};

/// ## Summary
/// Constructs the API router with every handler mounted under `/api`.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(calendar::routes())
        .push(format::routes())
}
