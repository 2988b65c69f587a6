//! Handler error type with HTML responses.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::views;

/// Request failures that end in an error page rather than a redirect.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(detail) => (StatusCode::NOT_FOUND, detail),
            AppError::Internal(detail) => {
                tracing::error!(detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };
        (status, Html(views::error_page(status, &message))).into_response()
    }
}

impl From<api::Error> for AppError {
    fn from(err: api::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<tower_sessions::session::Error> for AppError {
    fn from(err: tower_sessions::session::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_not_found_returns_404() {
        let response = AppError::NotFound("Patient 3 not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("Patient 3 not found"));
    }

    #[tokio::test]
    async fn test_internal_hides_details() {
        let response = AppError::Internal("disk I/O error".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("An internal error occurred"));
        assert!(!body.contains("disk I/O error"));
    }
}
