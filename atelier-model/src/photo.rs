use crate::ids::PhotoId;
use crate::metadata::PhotoMetadata;

/// One image record with dimensions, alt text, and fixed exposure metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Photo {
    pub id: PhotoId,
    /// Source path relative to the asset root, e.g. `/Iceland/iceland-3.jpg`.
    pub src: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
    pub metadata: PhotoMetadata,
}

impl Photo {
    /// Whether any renderer should accept this record. Photos failing the
    /// check are dropped from listings instead of failing them.
    pub fn is_renderable(&self) -> bool {
        !self.src.is_empty() && self.width > 0 && self.height > 0
    }
}
