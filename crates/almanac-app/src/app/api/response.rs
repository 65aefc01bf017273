use salvo::Response;
use salvo::writing::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// Response payload for the formatting endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct TextResponse {
    pub text: String,
}

/// Writes `err` as a JSON error with its status code.
pub(crate) fn render_error(res: &mut Response, err: &AppError) {
    let status = err.status_code();
    if status.is_server_error() {
        tracing::error!(error = %err, "Request failed");
    } else {
        tracing::warn!(error = %err, status = %status, "Request rejected");
    }

    res.status_code(status);
    res.render(Json(ErrorResponse {
        error: err.to_string(),
    }));
}
