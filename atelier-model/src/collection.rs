use crate::ids::{CollectionId, Slug};
use crate::photo::Photo;

/// A named, ordered set of photos with display metadata.
///
/// Collections are constructed once at process start and never mutated; the
/// photo sequence is exclusively owned by its collection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Collection {
    pub id: CollectionId,
    pub slug: Slug,
    pub title: String,
    /// Short description for previews.
    pub description: String,
    /// Full description for the collection page.
    pub full_description: String,
    /// Path to the cover image, relative to the asset root.
    pub cover_image: String,
    pub tags: Vec<String>,
    /// Marks the collection for promotion on the landing page.
    pub featured: bool,
    pub photos: Vec<Photo>,
}

impl Collection {
    /// Photos that pass the renderability check, in declaration order.
    pub fn renderable_photos(&self) -> impl Iterator<Item = &Photo> {
        self.photos.iter().filter(|photo| photo.is_renderable())
    }

    /// Exact tag equality, case-insensitive.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Case-insensitive substring match over title, short description, and
    /// tags. Used by the showcase search, not by catalog lookup.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }

    /// Photo at a 1-based generation index, if present.
    pub fn photo_at_index(&self, index: u32) -> Option<&Photo> {
        if index == 0 {
            return None;
        }
        self.photos.get(index as usize - 1)
    }
}
