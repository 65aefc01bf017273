//! Integration tests for the calendar and formatting endpoints.
//!
//! Each test drives the full router, including the configuration hoop, the
//! way the `almanac` binary assembles it.

mod calendar_api;
mod format_api;
mod helpers;
