//! Construction-time photo synthesis. Not a runtime operation: the catalog
//! calls into this once per collection while it is being built.

use atelier_model::{Photo, PhotoId, PhotoMetadata, Slug};
use chrono::NaiveDate;

use super::seed::CollectionSeed;

/// The four dimensions photos cycle through, chosen by position modulo four.
/// Positions start at 1, so the first photo lands on the 4:3 entry.
pub(crate) const ASPECT_RATIOS: [(u32, u32); 4] = [
    (1800, 1200), // 3:2
    (1800, 1350), // 4:3
    (1800, 1080), // 16:9
    (1200, 1800), // 2:3 (portrait)
];

/// The collection-wide metadata literal stamped on every generated photo.
pub(crate) fn shared_metadata(taken_at: NaiveDate) -> PhotoMetadata {
    PhotoMetadata {
        camera: "Sony Alpha A7 IV".to_string(),
        lens: "24-70mm f/2.8".to_string(),
        aperture: "f/8.0".to_string(),
        shutter_speed: "1/250".to_string(),
        iso: "100".to_string(),
        focal_length: "35mm".to_string(),
        taken_at,
    }
}

pub(crate) fn extension_for(seed: &CollectionSeed, index: u32) -> &'static str {
    seed.extension_overrides
        .iter()
        .find(|override_| override_.covers(index))
        .map(|override_| override_.extension)
        .unwrap_or(seed.extension)
}

pub(crate) fn photo_path(seed: &CollectionSeed, index: u32) -> String {
    format!(
        "/{}/{}-{}.{}",
        seed.folder,
        seed.slug,
        index,
        extension_for(seed, index)
    )
}

pub(crate) fn cover_path(seed: &CollectionSeed) -> String {
    format!("/{}/cover.{}", seed.folder, seed.extension)
}

pub(crate) fn photos(seed: &CollectionSeed, metadata: &PhotoMetadata) -> Vec<Photo> {
    let slug = Slug::new(seed.slug);
    (1..=seed.photo_count)
        .map(|index| {
            let ratio = ASPECT_RATIOS[index as usize % ASPECT_RATIOS.len()];
            Photo {
                id: PhotoId::indexed(&slug, index),
                src: photo_path(seed, index),
                width: ratio.0,
                height: ratio.1,
                alt: format!("{} image {}", seed.slug, index),
                metadata: metadata.clone(),
            }
        })
        .collect()
}
