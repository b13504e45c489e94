//! API Handlers
//!
//! HTTP request handlers for the admin API, the redirect path, and the
//! embedded HTML pages.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use tracing::{debug, info};

use crate::auth;
use crate::config::Config;
use crate::error::{Result, ShortenerError};
use crate::id::{generate_short_id, normalize_custom_id};
use crate::models::{
    CreateUrlRequest, DeleteResponse, DeleteUrlRequest, HealthResponse, UpdateUrlRequest,
    UrlResponse,
};
use crate::store::UrlStore;

/// Static admin console, served at /admin
const ADMIN_PAGE: &str = include_str!("../../assets/admin.html");

/// Placeholder landing page for the root and unknown paths
const LANDING_PAGE: &str = include_str!("../../assets/index.html");

/// Application state shared across all handlers.
///
/// Contains the URL store wrapped in Arc<RwLock<>> for thread-safe access
/// and the service configuration.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe mapping store
    pub store: Arc<RwLock<UrlStore>>,
    /// Service configuration (admin credentials, base URL, id length)
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState with the given store and configuration.
    pub fn new(store: UrlStore, config: Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }

    /// Creates a new AppState from configuration with an empty store.
    pub fn from_config(config: &Config) -> Self {
        Self::new(UrlStore::new(), config.clone())
    }
}

/// Handler for POST /api/urls
///
/// Creates a mapping. The short identifier is the normalized custom id when
/// one is supplied, otherwise a freshly generated one. Fails with 400 if the
/// identifier is already taken; the existing mapping is left untouched.
pub async fn create_url_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateUrlRequest>,
) -> Result<Json<UrlResponse>> {
    auth::require_admin(&headers, &state.config)?;

    // Custom slug wins when present and non-empty; empty means "generate"
    let short_id = match req.custom_id.as_deref().filter(|id| !id.is_empty()) {
        Some(custom) => normalize_custom_id(custom),
        None => generate_short_id(state.config.short_id_length),
    };

    let mut store = state.store.write().await;
    if store.contains(&short_id) {
        return Err(ShortenerError::DuplicateId);
    }
    store.put(short_id.clone(), req.long_url.clone());

    info!("Created mapping {} -> {}", short_id, req.long_url);
    Ok(Json(UrlResponse::new(
        short_id,
        req.long_url,
        &state.config.base_url,
    )))
}

/// Handler for GET /api/urls
///
/// Lists every stored mapping: all keys are enumerated, then each value is
/// fetched one read at a time. No pagination.
pub async fn list_urls_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<UrlResponse>>> {
    auth::require_admin(&headers, &state.config)?;

    let store = state.store.read().await;
    let mut urls = Vec::with_capacity(store.len());
    for short_id in store.list_keys() {
        if let Some(long_url) = store.get(&short_id) {
            urls.push(UrlResponse::new(short_id, long_url, &state.config.base_url));
        }
    }

    Ok(Json(urls))
}

/// Handler for PUT /api/urls
///
/// Unconditional upsert: writes the mapping whether or not the identifier
/// already exists.
pub async fn update_url_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<UpdateUrlRequest>,
) -> Result<Json<UrlResponse>> {
    auth::require_admin(&headers, &state.config)?;

    let mut store = state.store.write().await;
    store.put(req.short_id.clone(), req.long_url.clone());

    info!("Updated mapping {} -> {}", req.short_id, req.long_url);
    Ok(Json(UrlResponse::new(
        req.short_id,
        req.long_url,
        &state.config.base_url,
    )))
}

/// Handler for DELETE /api/urls
///
/// Deletes unconditionally; removing an absent identifier still succeeds.
pub async fn delete_url_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<DeleteUrlRequest>,
) -> Result<Json<DeleteResponse>> {
    auth::require_admin(&headers, &state.config)?;

    let mut store = state.store.write().await;
    let removed = store.remove(&req.short_id);

    if removed {
        info!("Deleted mapping {}", req.short_id);
    } else {
        debug!("Delete for unknown mapping {}", req.short_id);
    }
    Ok(Json(DeleteResponse::new()))
}

/// Handler for GET /:short_id
///
/// Redirects with 301 Moved Permanently when the identifier is known,
/// otherwise falls through to the landing page.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(short_id): Path<String>,
) -> Response {
    let store = state.store.read().await;
    match store.get(&short_id) {
        Some(long_url) => {
            debug!("Redirecting {} -> {}", short_id, long_url);
            (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, long_url)]).into_response()
        }
        None => Html(LANDING_PAGE).into_response(),
    }
}

/// Handler for GET /admin
///
/// Serves the static admin console. The page itself is reachable without
/// credentials; its embedded script authenticates against the API.
pub async fn admin_page_handler() -> Html<&'static str> {
    Html(ADMIN_PAGE)
}

/// Fallback handler for unmatched paths.
pub async fn landing_page_handler() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
