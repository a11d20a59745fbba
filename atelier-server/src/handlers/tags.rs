use axum::{Json, extract::State};

use crate::infra::app_state::AppState;

/// Deduplicated union of every collection's tags, used for filter chips.
pub async fn list_tags_handler(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .catalog()
            .tags()
            .into_iter()
            .map(String::from)
            .collect(),
    )
}
