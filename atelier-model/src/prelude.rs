//! Convenience re-exports for consumers that want the whole model surface.

pub use crate::collection::Collection;
pub use crate::ids::{CollectionId, PhotoId, Slug};
pub use crate::metadata::PhotoMetadata;
pub use crate::photo::Photo;
