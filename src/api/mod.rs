//! API Module
//!
//! HTTP handlers and routing for the shortener service.
//!
//! # Endpoints
//! - `POST /api/urls` - Create a mapping (admin)
//! - `GET /api/urls` - List all mappings (admin)
//! - `PUT /api/urls` - Upsert a mapping (admin)
//! - `DELETE /api/urls` - Delete a mapping (admin)
//! - `GET /:short_id` - Redirect to the stored destination
//! - `GET /admin` - Static admin console
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
