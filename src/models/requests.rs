//! Request DTOs for the shortener API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for creating a mapping (POST /api/urls)
///
/// # Fields
/// - `long_url`: The destination URL to shorten (stored as-is, unvalidated)
/// - `custom_id`: Optional caller-supplied slug; whitespace runs are
///   normalized to hyphens before use. Empty or absent means a random
///   identifier is generated instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUrlRequest {
    /// The destination URL
    pub long_url: String,
    /// Optional custom short identifier
    #[serde(default)]
    pub custom_id: Option<String>,
}

/// Request body for updating a mapping (PUT /api/urls)
///
/// The update is an unconditional upsert: no existence check is performed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUrlRequest {
    /// The short identifier to write
    pub short_id: String,
    /// The destination URL
    pub long_url: String,
}

/// Request body for deleting a mapping (DELETE /api/urls)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUrlRequest {
    /// The short identifier to delete
    pub short_id: String,
}
