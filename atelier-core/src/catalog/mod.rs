//! The Catalog Store: an immutable table of photo collections answering a
//! small set of pure queries.

mod generate;
mod seed;

use atelier_model::{Collection, CollectionId, Slug};
use chrono::Utc;

use crate::error::{CatalogError, Result};

/// Process-wide collection table. Built once at startup from the authored
/// seed literals, read-only afterwards; queries never fail except slug
/// lookup, whose miss is the catalog's single domain error.
#[derive(Debug, Clone)]
pub struct Catalog {
    collections: Vec<Collection>,
}

impl Catalog {
    /// Build the catalog from the authored seed table.
    ///
    /// The shared capture-date stamp on photo metadata is fixed here, so it
    /// is deterministic for the lifetime of the process.
    pub fn builtin() -> Self {
        Self::with_capture_date(Utc::now().date_naive())
    }

    pub fn with_capture_date(taken_at: chrono::NaiveDate) -> Self {
        let metadata = generate::shared_metadata(taken_at);
        let collections = seed::SEED
            .iter()
            .map(|seed| Collection {
                id: CollectionId::new(seed.id),
                slug: Slug::new(seed.slug),
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                full_description: seed.full_description.to_string(),
                cover_image: generate::cover_path(seed),
                tags: seed.tags.iter().map(|tag| tag.to_string()).collect(),
                featured: seed.featured,
                photos: generate::photos(seed, &metadata),
            })
            .collect();
        Self { collections }
    }

    /// Every collection, in declaration order.
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// Collections flagged for the landing page, declaration order preserved.
    pub fn featured(&self) -> impl Iterator<Item = &Collection> {
        self.collections.iter().filter(|c| c.featured)
    }

    /// Exact, case-sensitive slug lookup.
    pub fn get(&self, slug: &str) -> Result<&Collection> {
        self.collections
            .iter()
            .find(|collection| collection.slug == slug)
            .ok_or_else(|| CatalogError::NotFound(slug.to_string()))
    }

    /// Union of every collection's tags, deduplicated. Order carries no
    /// meaning but is stable within a process run (first-seen order).
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for collection in &self.collections {
            for tag in &collection.tags {
                if !tags.iter().any(|seen| seen == tag) {
                    tags.push(tag);
                }
            }
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn slug_lookup_round_trips_every_collection() {
        let catalog = catalog();
        for collection in catalog.collections() {
            let found = catalog
                .get(collection.slug.as_str())
                .expect("declared slug must resolve");
            assert_eq!(found, collection);
        }
    }

    #[test]
    fn unknown_slug_is_a_recoverable_not_found() {
        let catalog = catalog();
        match catalog.get("does-not-exist") {
            Err(CatalogError::NotFound(slug)) => assert_eq!(slug, "does-not-exist"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let catalog = catalog();
        assert!(catalog.get("Bali").is_err());
        assert!(catalog.get("bali").is_ok());
    }

    #[test]
    fn featured_is_the_flagged_subset_in_declaration_order() {
        let catalog = catalog();
        let featured: Vec<_> = catalog.featured().collect();
        let expected: Vec<_> = catalog
            .collections()
            .iter()
            .filter(|c| c.featured)
            .collect();
        assert_eq!(featured, expected);
        let slugs: Vec<_> = featured.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, ["new-zealand", "tokyo", "bali"]);
    }

    #[test]
    fn tags_are_deduplicated_and_cover_every_collection() {
        let catalog = catalog();
        let tags = catalog.tags();

        let mut sorted = tags.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), tags.len(), "duplicate tag in union");

        for collection in catalog.collections() {
            for tag in &collection.tags {
                assert!(tags.contains(&tag.as_str()), "missing tag {tag}");
            }
        }
        for &tag in &tags {
            assert!(
                catalog.collections().iter().any(|c| c.has_tag(tag)),
                "tag {tag} appears in no collection"
            );
        }
    }

    #[test]
    fn filtering_by_a_tag_present_nowhere_yields_nothing() {
        let catalog = catalog();
        let hits: Vec<_> = catalog
            .collections()
            .iter()
            .filter(|c| c.has_tag("astrophotography"))
            .collect();
        assert!(hits.is_empty());
    }

    #[test]
    fn tag_order_is_stable_first_seen() {
        let catalog = catalog();
        assert_eq!(catalog.tags(), catalog.tags());
        assert_eq!(catalog.tags()[0], "Nature");
    }

    #[test]
    fn photo_counts_match_the_declared_table() {
        let catalog = catalog();
        let counts: Vec<_> = catalog
            .collections()
            .iter()
            .map(|c| (c.slug.as_str(), c.photos.len()))
            .collect();
        assert_eq!(
            counts,
            [
                ("new-zealand", 18),
                ("tokyo", 20),
                ("bali", 16),
                ("iceland", 14),
                ("morocco", 21),
                ("urban-portraits", 16),
            ]
        );
    }

    #[test]
    fn photo_ids_and_paths_are_unique_and_index_derived() {
        let catalog = catalog();
        let iceland = catalog.get("iceland").unwrap();
        let ids: Vec<_> = iceland.photos.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.first().copied(), Some("iceland-1"));
        assert_eq!(ids.last().copied(), Some("iceland-14"));

        let mut unique_ids = ids.clone();
        unique_ids.sort_unstable();
        unique_ids.dedup();
        assert_eq!(unique_ids.len(), ids.len());

        let mut paths: Vec<_> = iceland.photos.iter().map(|p| p.src.as_str()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), iceland.photos.len());
    }

    #[test]
    fn aspect_ratios_cycle_with_period_four_from_index_one() {
        let catalog = catalog();
        let iceland = catalog.get("iceland").unwrap();

        // Index 4 wraps to the first table entry, index 5 to the second.
        let photo_4 = iceland.photo_at_index(4).unwrap();
        assert_eq!((photo_4.width, photo_4.height), (1800, 1200));
        let photo_5 = iceland.photo_at_index(5).unwrap();
        assert_eq!((photo_5.width, photo_5.height), (1800, 1350));

        for (offset, photo) in iceland.photos.iter().enumerate() {
            let wrapped = iceland.photo_at_index(offset as u32 + 5);
            if let Some(later) = wrapped {
                assert_eq!((photo.width, photo.height), (later.width, later.height));
            }
        }
    }

    #[test]
    fn extension_override_covers_only_its_index_range() {
        let catalog = catalog();
        let bali = catalog.get("bali").unwrap();
        for (offset, photo) in bali.photos.iter().enumerate() {
            let index = offset as u32 + 1;
            let expected = if (10..=15).contains(&index) { "jpg" } else { "jpeg" };
            assert!(
                photo.src.ends_with(&format!("bali-{index}.{expected}")),
                "photo {index} has path {}",
                photo.src
            );
        }
    }

    #[test]
    fn cover_paths_use_the_collection_folder_and_default_extension() {
        let catalog = catalog();
        assert_eq!(
            catalog.get("new-zealand").unwrap().cover_image,
            "/new zealand/cover.jpg"
        );
        assert_eq!(catalog.get("morocco").unwrap().cover_image, "/Morocco/cover.webp");
        assert_eq!(catalog.get("bali").unwrap().cover_image, "/Bali/cover.jpeg");
    }

    #[test]
    fn every_generated_photo_is_renderable() {
        let catalog = catalog();
        for collection in catalog.collections() {
            assert_eq!(
                collection.renderable_photos().count(),
                collection.photos.len()
            );
        }
    }

    #[test]
    fn photos_share_one_metadata_literal_per_collection() {
        let catalog = catalog();
        for collection in catalog.collections() {
            let first = &collection.photos[0].metadata;
            assert!(collection.photos.iter().all(|p| &p.metadata == first));
        }
    }
}
