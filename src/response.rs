//! Error envelope returned by every failed request.

use axum::http::StatusCode;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorBody {
    /// HTTP status code, repeated in the body.
    pub status: u16,
    /// Failure description; `null` when the failure carried none.
    pub message: Option<String>,
    /// Milliseconds since the Unix epoch when the error was produced.
    pub timestamp: i64,
}

pub fn error_body(status: StatusCode, message: Option<String>) -> ErrorBody {
    ErrorBody {
        status: status.as_u16(),
        message,
        timestamp: chrono::Utc::now().timestamp_millis(),
    }
}
