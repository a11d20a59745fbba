//! Showcase search: a pure post-filter over catalog listings.
//!
//! This is presentation-layer behavior layered on top of the catalog, not
//! part of the store's own contract. An empty result is a normal outcome.

use atelier_model::Collection;

/// Free-text query and tag filter, composed conjunctively.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    query: Option<String>,
    tag: Option<String>,
}

impl SearchFilter {
    /// Blank parameters are treated as absent.
    pub fn new(query: Option<String>, tag: Option<String>) -> Self {
        let normalize = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Self {
            query: normalize(query),
            tag: normalize(tag),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.tag.is_none()
    }

    /// Apply the filter over a listing, preserving input order. The query
    /// matches case-insensitively as a substring of title, description, or
    /// any tag; the tag filter requires exact case-insensitive equality.
    pub fn apply<'a>(&self, collections: &'a [Collection]) -> Vec<&'a Collection> {
        collections
            .iter()
            .filter(|collection| {
                self.query
                    .as_deref()
                    .is_none_or(|query| collection.matches_query(query))
                    && self
                        .tag
                        .as_deref()
                        .is_none_or(|tag| collection.has_tag(tag))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn empty_filter_returns_the_full_listing() {
        let catalog = Catalog::builtin();
        let filter = SearchFilter::new(None, Some("   ".into()));
        assert!(filter.is_empty());
        assert_eq!(
            filter.apply(catalog.collections()).len(),
            catalog.collections().len()
        );
    }

    #[test]
    fn query_matches_title_description_and_tags() {
        let catalog = Catalog::builtin();

        let by_title = SearchFilter::new(Some("fire and ice".into()), None);
        let hits = by_title.apply(catalog.collections());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug.as_str(), "iceland");

        let by_tag_substring = SearchFilter::new(Some("archit".into()), None);
        let slugs: Vec<_> = by_tag_substring
            .apply(catalog.collections())
            .iter()
            .map(|c| c.slug.as_str())
            .collect();
        assert_eq!(slugs, ["tokyo", "morocco"]);
    }

    #[test]
    fn tag_filter_requires_exact_equality() {
        let catalog = Catalog::builtin();

        let exact = SearchFilter::new(None, Some("urban".into()));
        let slugs: Vec<_> = exact
            .apply(catalog.collections())
            .iter()
            .map(|c| c.slug.as_str())
            .collect();
        assert_eq!(slugs, ["tokyo", "urban-portraits"]);

        let partial = SearchFilter::new(None, Some("urb".into()));
        assert!(partial.apply(catalog.collections()).is_empty());
    }

    #[test]
    fn query_and_tag_compose_conjunctively() {
        let catalog = Catalog::builtin();
        let filter = SearchFilter::new(Some("street".into()), Some("people".into()));
        let hits = filter.apply(catalog.collections());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug.as_str(), "urban-portraits");
    }

    #[test]
    fn unknown_tag_yields_an_empty_sequence() {
        let catalog = Catalog::builtin();
        let filter = SearchFilter::new(None, Some("astro".into()));
        assert!(filter.apply(catalog.collections()).is_empty());
    }
}
