//! Typed errors and HTTP mapping.

use crate::response::error_body;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("validation: {0}")]
    Validation(String),
    #[error("logging: {0}")]
    Logging(String),
}

/// Every failure that can reach the HTTP boundary. Only `NotFound` is
/// distinguished on the wire; everything else collapses to 400.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Db(#[from] sqlx::Error),
    #[error("{0}")]
    Storage(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::NotFound(msg) => tracing::debug!(%msg, "not found"),
            AppError::Db(e) => tracing::warn!(error = %e, "database failure"),
            other => tracing::warn!(error = %other, "request failed"),
        }
        let message = self.to_string();
        let message = if message.is_empty() { None } else { Some(message) };
        (status, Json(error_body(status, message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_message() {
        let (status, body) = body_json(AppError::NotFound("customer with id: 9 not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
        assert_eq!(body["message"], "customer with id: 9 not found");
        assert!(body["timestamp"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn other_failures_collapse_to_400() {
        let (status, body) = body_json(AppError::Db(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
        assert!(body["message"].as_str().unwrap().contains("timed out"));

        let (status, _) = body_json(AppError::Storage("lock poisoned".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = body_json(AppError::Config(ConfigError::Validation("bad".into()))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn empty_description_serializes_null_message() {
        let (status, body) = body_json(AppError::BadRequest(String::new())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_null());
    }
}
