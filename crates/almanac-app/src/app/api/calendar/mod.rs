//! Calendar conversion and grid endpoints.

use salvo::Router;

mod convert;
mod grid;
mod systems;


#[must_use]
pub fn routes() -> Router {
    Router::with_path(almanac_core::constants::CALENDAR_ROUTE_COMPONENT)
        .push(systems::routes())
        .push(grid::routes())
        .push(
            Router::with_path("{system}")
                .push(convert::routes())
                .push(grid::system_routes()),
        )
}
