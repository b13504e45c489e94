//! Request and Response models for the shortener API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies. All fields
//! are camelCase on the wire.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CreateUrlRequest, DeleteUrlRequest, UpdateUrlRequest};
pub use responses::{DeleteResponse, ErrorResponse, HealthResponse, UrlResponse};
