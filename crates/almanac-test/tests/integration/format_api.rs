//! Tests for the formatting endpoints.

use salvo::http::StatusCode;
use serde_json::{Value, json};

use super::helpers::*;

async fn text(request: TestRequest) -> String {
    let body: Value = request
        .send(create_test_service())
        .await
        .assert_status(StatusCode::OK)
        .json();
    body["text"].as_str().map(str::to_owned).unwrap_or_default()
}

#[test_log::test(tokio::test)]
async fn year_ranges() {
    assert_eq!(
        text(TestRequest::get("/api/format/years?start=100&end=200")).await,
        "100 A.D. - 200 A.D."
    );
    assert_eq!(
        text(TestRequest::get("/api/format/years?start=-100&end=100")).await,
        "100 B.C. - 100 A.D."
    );
    assert_eq!(
        text(TestRequest::get("/api/format/years?start=1066&end=1087")).await,
        "1066 - 1087"
    );
}

#[test_log::test(tokio::test)]
async fn year_ranges_reject_non_numbers() {
    let _ = TestRequest::get("/api/format/years?start=then&end=now")
        .send(create_test_service())
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn date_estimates() {
    let cases = [
        (json!({"date_known": true, "date": "1066-10-14"}), "1066 AD"),
        (
            json!({"date_estimate_start": -450, "date_precision": "century"}),
            "c. 5th Century BC",
        ),
        (
            json!({"date_estimate_start": 1200, "date_estimate_end": 1300}),
            "c. 1200 AD\u{2013}1300 AD",
        ),
        (json!({}), "Date Unknown"),
    ];

    for (estimate, expected) in cases {
        let got = text(TestRequest::post("/api/format/date-estimate").json(estimate)).await;
        assert_eq!(got, expected);
    }
}
