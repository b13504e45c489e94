//! Error types for the shortener service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Shortener Error Enum ==
/// Unified error type for the shortener service.
///
/// Only the two conditions the API distinguishes are modeled here; malformed
/// request bodies surface through the framework's default rejections.
#[derive(Error, Debug)]
pub enum ShortenerError {
    /// Missing, malformed, or mismatched admin credentials
    #[error("Unauthorized")]
    Unauthorized,

    /// A create attempted to reuse an existing short identifier
    #[error("Short URL already exists")]
    DuplicateId,
}

// == IntoResponse Implementation ==
impl IntoResponse for ShortenerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ShortenerError::Unauthorized => StatusCode::UNAUTHORIZED,
            ShortenerError::DuplicateId => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the shortener service.
pub type Result<T> = std::result::Result<T, ShortenerError>;
