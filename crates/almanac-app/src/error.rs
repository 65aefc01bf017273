use salvo::http::StatusCode;
use thiserror::Error;

use almanac_calendar::error::CalendarError;
use almanac_core::error::CoreError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    CalendarError(#[from] CalendarError),

    #[error(transparent)]
    CoreError(#[from] CoreError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unknown calendar system: {0}")]
    UnknownSystem(String),
}

impl AppError {
    /// ## Summary
    /// HTTP status reported for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::CalendarError(CalendarError::OutOfRange { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::CalendarError(CalendarError::InvalidDate(_)) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::UnknownSystem(_) => StatusCode::NOT_FOUND,
            Self::CalendarError(CalendarError::CoreError(e)) | Self::CoreError(e) => {
                core_status(e)
            }
        }
    }
}

const fn core_status(error: &CoreError) -> StatusCode {
    match error {
        CoreError::ParseError(_) | CoreError::ValidationError(_) => StatusCode::BAD_REQUEST,
        CoreError::ConfigError(_) | CoreError::InvariantViolation(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
