//! Response DTOs for the shortener API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// A stored mapping as returned by the create, update, and list operations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlResponse {
    /// The short identifier
    pub short_id: String,
    /// The full short link built from the configured base URL
    pub short_url: String,
    /// The destination URL
    pub long_url: String,
}

impl UrlResponse {
    /// Creates a new UrlResponse, building the short link from the base URL.
    pub fn new(short_id: impl Into<String>, long_url: impl Into<String>, base_url: &str) -> Self {
        let short_id = short_id.into();
        Self {
            short_url: format!("{}/{}", base_url.trim_end_matches('/'), short_id),
            short_id,
            long_url: long_url.into(),
        }
    }
}

/// Response body for the delete operation (DELETE /api/urls)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
}

impl DeleteResponse {
    /// Creates the standard delete acknowledgement.
    pub fn new() -> Self {
        Self {
            message: "Deleted successfully".to_string(),
        }
    }
}

impl Default for DeleteResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
