//! Tests for the calendar endpoints.
//!
//! Verifies conversions in both directions, month grids with events and the
//! error statuses.

use salvo::http::StatusCode;
use serde_json::{Value, json};

use super::helpers::*;

/// ## Summary
/// Converting to a system and back over HTTP returns the original date.
#[test_log::test(tokio::test)]
async fn conversions_round_trip_over_http() {
    let service = create_test_service();

    for system in ["gregorian", "egyptian", "islamic"] {
        for gregorian in ["0001-01-01", "0622-07-19", "1970-01-01", "2024-02-29", "2999-12-31"] {
            let converted: Value = TestRequest::get(&format!(
                "/api/calendar/{system}/from-gregorian?date={gregorian}"
            ))
            .send(service)
            .await
            .assert_status(StatusCode::OK)
            .json();

            let date = &converted["date"];
            tracing::debug!(system, gregorian, %date, "Converted");

            let back: Value = TestRequest::get(&format!(
                "/api/calendar/{system}/to-gregorian?year={}&month={}&day={}",
                date["year"], date["month"], date["day"]
            ))
            .send(service)
            .await
            .assert_status(StatusCode::OK)
            .json();

            assert_eq!(back["date"], gregorian, "{system}");
        }
    }
}

#[test_log::test(tokio::test)]
async fn new_year_2024_in_every_system() {
    let service = create_test_service();

    let islamic: Value = TestRequest::get("/api/calendar/islamic/from-gregorian?date=2024-01-01")
        .send(service)
        .await
        .json();
    assert_eq!(
        islamic["date"],
        json!({"year": 1445, "month": 6, "day": 19, "is_intercalary": false})
    );

    let egyptian: Value = TestRequest::get("/api/calendar/egyptian/from-gregorian?date=2024-01-01")
        .send(service)
        .await
        .json();
    assert_eq!(egyptian["date"]["year"], 2772);
    assert_eq!(egyptian["date"]["month"], 9);
    assert_eq!(egyptian["date"]["day"], 19);
    assert_eq!(egyptian["month_name"], "Pachons");
}

/// ## Summary
/// An annual Islamic holiday lands on the same Hijri day in a later year.
#[test_log::test(tokio::test)]
async fn annual_islamic_event_recurs_in_month_grid() {
    let events = json!([{
        "id": 1,
        "holiday_name": "Ramadan begins",
        "calendar_date": "2024-03-11",
        "isAnnual": true,
        "reference_system": "islamic",
        "type": "holiday"
    }]);

    let grid: Value = TestRequest::post("/api/calendar/islamic/month?year=1447&month=9")
        .json(events)
        .send(create_test_service())
        .await
        .assert_status(StatusCode::OK)
        .json();

    let first = &grid["days"][0];
    assert_eq!(first["gregorian"], "2026-02-18");
    assert_eq!(first["events"][0]["holiday_name"], "Ramadan begins");
    assert_eq!(first["events"][0]["type"], "holiday");
}

#[test_log::test(tokio::test)]
async fn egyptian_month_navigation_reaches_epagomenal_days() {
    let grid: Value = TestRequest::get("/api/calendar/egyptian/month?year=2772&month=12")
        .send(create_test_service())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(grid["next"], json!({"year": 2772, "month": 13}));

    let epagomenal: Value = TestRequest::get("/api/calendar/egyptian/month?year=2772&month=13")
        .send(create_test_service())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(epagomenal["days"].as_array().map(Vec::len), Some(5));
    assert_eq!(epagomenal["next"], json!({"year": 2773, "month": 1}));
}

#[test_log::test(tokio::test)]
async fn week_defaults_to_configured_system() {
    let week: Value = TestRequest::post("/api/calendar/week?date=2024-01-03")
        .json(json!([]))
        .send(create_test_service())
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(week["system"], "gregorian");
    assert_eq!(week["days"][0]["gregorian"], "2023-12-31");
    assert_eq!(week["days"][6]["weekday_name"], "Sat");
}

#[test_log::test(tokio::test)]
async fn error_statuses() {
    let service = create_test_service();

    let _ = TestRequest::get("/api/calendar/julian/from-gregorian?date=2024-01-01")
        .send(service)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_body_contains("julian");

    let _ = TestRequest::get("/api/calendar/islamic/from-gregorian?date=2024-02-30")
        .send(service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let _ = TestRequest::get("/api/calendar/egyptian/to-gregorian?year=2147483647&month=1&day=1")
        .send(service)
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let _ = TestRequest::post("/api/calendar/day?date=2024-01-01")
        .json(json!({"holiday_name": "not a list"}))
        .send(service)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_body_contains("error");
}

#[test_log::test(tokio::test)]
async fn healthcheck() {
    let _ = TestRequest::get("/api/app/healthcheck")
        .send(create_test_service())
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("OK");
}
