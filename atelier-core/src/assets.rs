//! Asset validation for the files the catalog references.
//!
//! Two independent layers: a manifest walk that checks every referenced
//! file exists under the asset root (run from the CLI before deploys), and
//! magic-byte sniffing used on the serving path to catch corrupted or
//! mismatched files before they go out.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::catalog::Catalog;

/// Image formats the catalog is allowed to reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    WebP,
    Gif,
}

impl ImageFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::WebP => "image/webp",
            ImageFormat::Gif => "image/gif",
        }
    }

    /// Whether a file extension agrees with the sniffed format.
    pub fn matches_extension(self, extension: &str) -> bool {
        match self {
            ImageFormat::Jpeg => {
                extension.eq_ignore_ascii_case("jpg") || extension.eq_ignore_ascii_case("jpeg")
            }
            ImageFormat::Png => extension.eq_ignore_ascii_case("png"),
            ImageFormat::WebP => extension.eq_ignore_ascii_case("webp"),
            ImageFormat::Gif => extension.eq_ignore_ascii_case("gif"),
        }
    }

    /// Detect the format from leading magic bytes.
    pub fn sniff(data: &[u8]) -> Result<Self, SniffError> {
        if data.len() < 4 {
            return Err(SniffError::TooSmall);
        }

        // JPEG: FF D8 FF
        if data[0] == 0xFF && data[1] == 0xD8 && data[2] == 0xFF {
            return Ok(ImageFormat::Jpeg);
        }

        // PNG: 89 50 4E 47 0D 0A 1A 0A
        if data.len() >= 8 && data[0..8] == [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A] {
            return Ok(ImageFormat::Png);
        }

        // WebP: RIFF....WEBP
        if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
            return Ok(ImageFormat::WebP);
        }

        // GIF: GIF87a or GIF89a
        if data.len() >= 6 && &data[0..3] == b"GIF" {
            return Ok(ImageFormat::Gif);
        }

        warn!(
            "unrecognized image content, first 8 bytes: {:02X?}",
            &data[..8.min(data.len())]
        );
        Err(SniffError::Unrecognized)
    }
}

/// Why magic-byte detection rejected a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SniffError {
    /// Payload too small to contain a valid image header.
    TooSmall,
    /// Payload does not match any recognized image format.
    Unrecognized,
}

impl fmt::Display for SniffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SniffError::TooSmall => write!(f, "payload too small to hold an image header"),
            SniffError::Unrecognized => write!(f, "unrecognized image content"),
        }
    }
}

impl std::error::Error for SniffError {}

/// Extensions probed when a referenced file is missing, to tell a renamed
/// export apart from a genuinely absent one.
const KNOWN_EXTENSIONS: &[&str] = &["jpg", "jpeg", "webp", "png"];

/// Outcome of a manifest validation walk.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub total: usize,
    pub validated: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn missing(&self) -> usize {
        self.total - self.validated
    }

    fn check_file(&mut self, root: &Path, reference: &str) {
        self.total += 1;
        let resolved = resolve(root, reference);
        if resolved.is_file() {
            self.validated += 1;
            return;
        }

        // The file may have been exported under a sibling extension.
        for extension in KNOWN_EXTENSIONS {
            let probe = resolved.with_extension(extension);
            if probe != resolved && probe.is_file() {
                self.validated += 1;
                self.warnings.push(format!(
                    "{reference}: found with unexpected extension .{extension}"
                ));
                return;
            }
        }

        self.errors.push(format!("missing image: {reference}"));
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} checked, {} validated, {} missing, {} warnings",
            self.total,
            self.validated,
            self.missing(),
            self.warnings.len()
        )
    }
}

fn resolve(root: &Path, reference: &str) -> PathBuf {
    root.join(reference.trim_start_matches('/'))
}

/// Walk the catalog and verify the cover image and every generated photo
/// path exists under `root`. Missing files are errors; files found under a
/// sibling extension are warnings but still count as validated.
pub fn validate_assets(catalog: &Catalog, root: &Path) -> ValidationReport {
    let mut report = ValidationReport::default();

    for collection in catalog.collections() {
        let folder = resolve(root, &collection.cover_image)
            .parent()
            .map(Path::to_path_buf);
        if let Some(folder) = folder
            && !folder.is_dir()
        {
            report.errors.push(format!(
                "collection directory missing: {}",
                folder.display()
            ));
            continue;
        }

        report.check_file(root, &collection.cover_image);
        for photo in &collection.photos {
            report.check_file(root, &photo.src);
        }
    }

    report
}
