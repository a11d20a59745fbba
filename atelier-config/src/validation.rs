//! Non-fatal configuration checks surfaced as startup warnings.

use crate::models::Config;

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint(&mut self, message: impl Into<String>, hint: impl Into<String>) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }
}

/// Guard rails that never fail the load but deserve operator attention.
pub fn check(config: &Config, warnings: &mut ConfigWarnings) {
    if !config.asset_root().is_dir() {
        warnings.push_with_hint(
            format!(
                "asset root {} does not exist; image serving and validation will fail",
                config.asset_root().display()
            ),
            "Set ATELIER_ASSET_ROOT or [assets].root to the exported image directory",
        );
    }

    if !config.dev_mode && config.cors.allowed_origins.is_empty() {
        warnings.push(
            "no CORS origins configured outside dev mode; cross-origin consumers will be refused",
        );
    }

    if config.cors.is_wildcard_included() && !config.dev_mode {
        warnings.push("wildcard CORS origin configured outside dev mode");
    }
}
