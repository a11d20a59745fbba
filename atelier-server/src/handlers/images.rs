//! Catalog-resolved image delivery with an atomic read-then-serve check:
//! bytes are sniffed for a recognized image format before they go out, so a
//! corrupted or mismatched file is refused instead of served with a guessed
//! content type.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use atelier_core::assets::ImageFormat;

use crate::{
    errors::{AppError, AppResult},
    infra::app_state::AppState,
};

/// Asset paths are derived from the authored manifest and never rewritten in
/// place, so clients may cache indefinitely.
const CACHE_CONTROL_VALUE: &str = "public, max-age=31536000, immutable";

/// Serve one photo (`/images/{slug}/{index}`) or the collection cover
/// (`/images/{slug}/cover`).
pub async fn serve_photo_handler(
    State(state): State<AppState>,
    Path((slug, selector)): Path<(String, String)>,
) -> AppResult<Response> {
    let collection = state.catalog().get(&slug)?;

    let reference = if selector == "cover" {
        collection.cover_image.clone()
    } else {
        let index: u32 = selector
            .parse()
            .map_err(|_| AppError::bad_request(format!("invalid photo selector: {selector}")))?;
        let photo = collection
            .photo_at_index(index)
            .filter(|photo| photo.is_renderable())
            .ok_or_else(|| AppError::not_found(format!("no photo {index} in {slug}")))?;
        photo.src.clone()
    };

    let path = state
        .config()
        .asset_root()
        .join(reference.trim_start_matches('/'));

    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "catalog references an asset missing on disk");
            return Err(AppError::not_found(format!("asset missing: {reference}")));
        }
        Err(err) => {
            error!(path = %path.display(), error = %err, "failed to read asset");
            return Err(AppError::internal("failed to read asset"));
        }
    };

    let format = ImageFormat::sniff(&bytes)
        .map_err(|err| AppError::internal(format!("refusing to serve {reference}: {err}")))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    if !format.matches_extension(extension) {
        warn!(
            reference = %reference,
            detected = format.content_type(),
            "file extension disagrees with sniffed content"
        );
    }

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type()),
            (header::CACHE_CONTROL, CACHE_CONTROL_VALUE),
        ],
        bytes,
    )
        .into_response())
}
