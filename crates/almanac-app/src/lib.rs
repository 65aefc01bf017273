//! HTTP service exposing the calendar engine and text formatters as JSON.

pub mod app;
pub mod config;
pub mod error;
