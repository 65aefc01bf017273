//! Text formatting for dates, year ranges and labels.
//!
//! ## Summary
//! Produces the human-readable strings the culture pages show next to
//! periods, historical events, films and recipes.

mod date;
mod estimate;
mod text;
mod years;

pub use date::format_date;
pub use estimate::{DateEstimate, DatePrecision, format_date_estimate};
pub use text::{format_phrase, format_runtime};
pub use years::format_years;
