#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides a shared Salvo service built like the binary's, plus a small
//! request builder and response assertions.

use std::sync::{Arc, OnceLock};

use salvo::http::{Method, StatusCode};
use salvo::prelude::*;
use salvo::test::{RequestBuilder, ResponseExt, TestClient};
use serde::de::DeserializeOwned;
use serde_json::Value;

use almanac_test::component::config::{ConfigHandler, Settings};

pub use tracing;

/// Static reference to shared test service (initialized once per test run)
static TEST_SERVICE: OnceLock<Service> = OnceLock::new();

/// Settings for tests: defaults, pinned to UTC.
fn test_config() -> Settings {
    Settings::from_toml("[calendar]\ntimezone = \"UTC\"\n").expect("Test settings should be valid")
}

/// Creates a test Salvo service instance for integration testing.
///
/// ## Summary
/// Returns a shared test service with every API route behind the
/// configuration hoop. The service is initialized once and reused across
/// tests.
///
/// ## Panics
/// Panics if the test settings cannot be built.
#[must_use]
pub fn create_test_service() -> &'static Service {
    TEST_SERVICE.get_or_init(|| {
        let router = Router::new()
            .hoop(ConfigHandler {
                settings: Arc::new(test_config()),
            })
            .push(almanac_test::app::api::routes());
        Service::new(router)
    })
}

/// Test request builder for constructing HTTP requests.
pub struct TestRequest {
    method: Method,
    path: String,
    body: Option<Value>,
}

impl TestRequest {
    #[must_use]
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            body: None,
        }
    }

    #[must_use]
    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    /// Sets a JSON body.
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sends the request to the service and returns the response.
    ///
    /// ## Panics
    /// Panics if the response body cannot be read.
    pub async fn send(self, service: &Service) -> TestResponse {
        let url = format!("http://127.0.0.1:5800{}", self.path);

        let mut client = match self.method.as_str() {
            "GET" => TestClient::get(&url),
            "POST" => TestClient::post(&url),
            _ => RequestBuilder::new(&url, self.method.clone()),
        };

        if let Some(body) = &self.body {
            client = client.json(body);
        }

        let mut response = client.send(service).await;
        let status = response
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.take_string().await.expect("Readable response body");

        TestResponse { status, body }
    }
}

/// Represents an HTTP test response for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestResponse {
    /// Asserts that the response status matches the expected code.
    #[must_use]
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status, expected,
            "Expected status {expected} but got {}: {}",
            self.status, self.body
        );
        self
    }

    /// Asserts that the response body contains the expected substring.
    #[must_use]
    pub fn assert_body_contains(self, expected: &str) -> Self {
        assert!(
            self.body.contains(expected),
            "Expected body to contain '{expected}' but got:\n{}",
            self.body
        );
        self
    }

    /// Parses the body as JSON.
    ///
    /// ## Panics
    /// Panics if the body is not valid JSON for `T`.
    #[must_use]
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_str(&self.body).expect("Response body should be valid JSON")
    }
}
