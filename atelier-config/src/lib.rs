//! Shared configuration library for Atelier.
//!
//! This crate centralizes config loading and validation so the server binary
//! and any tooling share a single source of truth for defaults and override
//! precedence. Values resolve in order: built-in defaults, then an optional
//! `atelier.toml`, then environment variables (a `.env` file is honored),
//! then whatever CLI flags the binary applies on top.

pub mod loader;
pub mod models;
pub mod sources;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigLoadError};
pub use models::{AssetsConfig, Config, ConfigMetadata, CorsConfig, ServerConfig};
pub use validation::{ConfigWarning, ConfigWarnings};
