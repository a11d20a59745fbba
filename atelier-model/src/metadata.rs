use chrono::NaiveDate;

/// Technical capture metadata attached to a photo.
///
/// Authored as one collection-wide literal: every photo in a collection
/// shares the same record, so the values are placeholder constants rather
/// than per-photo truth.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PhotoMetadata {
    pub camera: String,
    pub lens: String,
    pub aperture: String,
    pub shutter_speed: String,
    pub iso: String,
    pub focal_length: String,
    pub taken_at: NaiveDate,
}
