use salvo::Router;

mod healthcheck;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(almanac_core::constants::APP_ROUTE_COMPONENT).push(healthcheck::routes())
}
