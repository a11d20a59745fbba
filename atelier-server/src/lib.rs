//! # Atelier Server
//!
//! HTTP surface for the Atelier portfolio platform.
//!
//! ## Overview
//!
//! - **Catalog API**: versioned JSON endpoints over the in-memory collection
//!   catalog (listings, featured subset, slug lookup, tags, showcase search)
//! - **Image Delivery**: catalog-resolved photo assets served with magic-byte
//!   content verification and immutable cache headers
//! - **Asset Validation**: a `validate-assets` subcommand that checks every
//!   referenced file exists before a deploy
//!
//! The server is built on Axum. All state is immutable after startup: the
//! catalog is constructed once and shared behind `Arc`, so request handling
//! needs no locking.

pub mod errors;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderValue, Method},
    routing::get,
};
use serde_json::{Value, json};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Assemble the full application router: health endpoints, versioned API,
/// catalog-resolved image delivery, and the raw asset passthrough.
pub fn create_app(state: AppState) -> Router {
    let versioned_api = routes::create_api_router();

    // Build CORS layer (permissive in dev, allow-list in prod)
    let cors_layer = if state.config().dev_mode {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config()
            .cors
            .allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();
        let allow_origin = if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        };

        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::HEAD])
    };

    Router::new()
        .route("/ping", get(ping_handler))
        .route("/health", get(health_handler))
        .route(
            "/images/{slug}/{selector}",
            get(handlers::images::serve_photo_handler),
        )
        .merge(versioned_api)
        // Raw hosting-layer passthrough; image bytes are opaque here.
        .nest_service("/assets", ServeDir::new(state.config().asset_root()))
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn ping_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Atelier portfolio server is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    // The asset root is the only external dependency worth probing.
    let asset_root_present = state.config().asset_root().is_dir();
    let status = if asset_root_present { "healthy" } else { "degraded" };

    Json(json!({
        "status": status,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {
            "asset_root": asset_root_present,
            "collections": state.catalog().collections().len(),
        }
    }))
}
