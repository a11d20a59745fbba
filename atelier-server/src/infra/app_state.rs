use std::{fmt, sync::Arc};

use atelier_config::Config;
use atelier_core::Catalog;

/// Shared handler state.
///
/// The catalog is immutable for the lifetime of the process, so handlers
/// read it concurrently without locking. Constructed once at startup and
/// passed in explicitly; nothing here is ambient module state.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    config: Arc<Config>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, config: Arc<Config>) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
