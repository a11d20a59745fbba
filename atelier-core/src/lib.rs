//! # Atelier Core
//!
//! Core library for the Atelier portfolio platform: the in-memory catalog of
//! photo collections and everything that operates directly on it.
//!
//! ## Overview
//!
//! - **Catalog Store**: an immutable, process-wide table of collections with
//!   a pure query surface ([`catalog::Catalog`])
//! - **Photo Generation**: deterministic synthesis of photo records from the
//!   authored seed table at construction time
//! - **Search**: the case-insensitive post-filter the showcase applies over
//!   catalog listings ([`search::SearchFilter`])
//! - **Asset Validation**: manifest existence checks and magic-byte content
//!   sniffing for the image files the catalog references ([`assets`])
//!
//! The catalog never mutates after construction, so every query is a pure
//! call over shared immutable state and handlers read it without locking.

pub mod assets;
pub mod catalog;
pub mod error;
pub mod search;

// Intentionally curated re-exports for downstream consumers.
pub use assets::{ImageFormat, SniffError, ValidationReport, validate_assets};
pub use catalog::Catalog;
pub use error::{CatalogError, Result as CatalogResult};
pub use search::SearchFilter;
