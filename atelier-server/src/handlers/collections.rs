use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::debug;

use atelier_core::SearchFilter;
use atelier_model::Collection;

use crate::{errors::AppResult, infra::app_state::AppState};

/// Query parameters accepted by the showcase search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub tag: Option<String>,
}

/// Every collection in declaration order.
pub async fn list_collections_handler(State(state): State<AppState>) -> Json<Vec<Collection>> {
    Json(state.catalog().collections().to_vec())
}

/// The landing-page subset, declaration order preserved.
pub async fn featured_collections_handler(
    State(state): State<AppState>,
) -> Json<Vec<Collection>> {
    Json(state.catalog().featured().cloned().collect())
}

/// Showcase search: free-text query plus optional exact tag filter, both
/// applied as pure post-filters over the full listing.
pub async fn search_collections_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Collection>> {
    let filter = SearchFilter::new(params.q, params.tag);
    let hits: Vec<Collection> = filter
        .apply(state.catalog().collections())
        .into_iter()
        .cloned()
        .collect();
    debug!(hits = hits.len(), "showcase search");
    Json(hits)
}

/// One collection by slug. An unknown slug maps to the standard 404 error
/// body; it is the catalog's only domain error and is never logged as a
/// fault.
pub async fn get_collection_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Collection>> {
    let collection = state.catalog().get(&slug)?;
    Ok(Json(collection.clone()))
}
