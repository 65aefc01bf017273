//! Text formatting endpoints.

use almanac_core::util::format::{
    DateEstimate, format_date, format_date_estimate, format_phrase, format_runtime, format_years,
};
use salvo::{Request, Response, Router, handler, writing::Json};

use super::params::required_query;
use super::response::{TextResponse, render_error};
use crate::error::{AppError, AppResult};


fn text(text: String) -> Json<TextResponse> {
    Json(TextResponse { text })
}

fn years(req: &Request) -> AppResult<String> {
    Ok(format_years(
        required_query(req, "start")?,
        required_query(req, "end")?,
    ))
}

/// ## Summary
/// GET /api/format/years?start=&end= - Year range label
///
/// ## Errors
/// Returns HTTP 400 if either year is missing or not an integer
#[handler]
async fn years_handler(req: &mut Request, res: &mut Response) {
    match years(req) {
        Ok(body) => res.render(text(body)),
        Err(e) => render_error(res, &e),
    }
}

/// ## Summary
/// POST /api/format/date-estimate - Label for a possibly uncertain date
///
/// ## Errors
/// Returns HTTP 400 if the body is not a date estimate
#[handler]
async fn date_estimate_handler(req: &mut Request, res: &mut Response) {
    match req.parse_json::<DateEstimate>().await {
        Ok(estimate) => res.render(text(format_date_estimate(Some(&estimate)))),
        Err(e) => render_error(
            res,
            &AppError::BadRequest(format!("Invalid request body: {e}")),
        ),
    }
}

/// ## Summary
/// GET /api/format/date?value= - Long-form date, e.g. "02 January 2024"
#[handler]
async fn date_handler(req: &mut Request) -> Json<TextResponse> {
    text(format_date(req.query::<String>("value").as_deref()))
}

/// ## Summary
/// GET /api/format/runtime?value=H:M[:S] - Runtime in minutes
#[handler]
async fn runtime_handler(req: &mut Request) -> Json<TextResponse> {
    text(format_runtime(req.query::<String>("value").as_deref()))
}

/// ## Summary
/// GET /api/format/phrase?value= - Capitalised phrase
#[handler]
async fn phrase_handler(req: &mut Request) -> Json<TextResponse> {
    text(format_phrase(
        req.query::<String>("value").as_deref().unwrap_or_default(),
    ))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(almanac_core::constants::FORMAT_ROUTE_COMPONENT)
        .push(Router::with_path("years").get(years_handler))
        .push(Router::with_path("date-estimate").post(date_estimate_handler))
        .push(Router::with_path("date").get(date_handler))
        .push(Router::with_path("runtime").get(runtime_handler))
        .push(Router::with_path("phrase").get(phrase_handler))
}
