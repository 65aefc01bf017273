//! Shared building blocks for the Almanac calendar service.
//!
//! Configuration loading, the core error type, route constants, the
//! calendar-system tag and the text formatting helpers used by the
//! culture pages.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod util;
