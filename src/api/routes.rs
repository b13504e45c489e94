//! API Routes
//!
//! Configures the Axum router with all shortener endpoints.

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{cors::{Any, CorsLayer}, trace::TraceLayer};

use super::handlers::{
    admin_page_handler, create_url_handler, delete_url_handler, health_handler,
    landing_page_handler, list_urls_handler, redirect_handler, update_url_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /api/urls` - Create a mapping (admin)
/// - `GET /api/urls` - List all mappings (admin)
/// - `PUT /api/urls` - Upsert a mapping (admin)
/// - `DELETE /api/urls` - Delete a mapping (admin)
/// - `GET /:short_id` - Redirect to the stored destination
/// - `GET /admin` - Static admin console
/// - `GET /health` - Health check endpoint
/// - anything else - Static landing page
///
/// # Middleware
/// - CORS: wildcard origin, fixed method list, `Content-Type` and
///   `Authorization` allowed headers; also answers preflight requests
/// - Tracing: logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // Build router with all endpoints
    Router::new()
        .route(
            "/api/urls",
            get(list_urls_handler)
                .post(create_url_handler)
                .put(update_url_handler)
                .delete(delete_url_handler),
        )
        .route("/health", get(health_handler))
        .route("/admin", get(admin_page_handler))
        .route("/:short_id", get(redirect_handler))
        .fallback(landing_page_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
