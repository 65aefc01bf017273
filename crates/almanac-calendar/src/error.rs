use thiserror::Error;

/// Calendar conversion and layout errors
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Julian day {julian_day} is outside the supported date range")]
    OutOfRange { julian_day: i64 },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error(transparent)]
    CoreError(#[from] almanac_core::error::CoreError),
}

pub type CalendarResult<T> = std::result::Result<T, CalendarError>;
