use axum::{Router, routing::get};

use crate::{
    AppState,
    handlers::{
        collections::{
            featured_collections_handler, get_collection_handler, list_collections_handler,
            search_collections_handler,
        },
        tags::list_tags_handler,
    },
};

/// Create all v1 API routes
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/collections", get(list_collections_handler))
        .route("/collections/featured", get(featured_collections_handler))
        .route("/collections/search", get(search_collections_handler))
        .route("/collections/{slug}", get(get_collection_handler))
        .route("/tags", get(list_tags_handler))
}
