//! Raw configuration sources before composition: the TOML file shape and
//! the environment variable set.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Raw configuration as defined in an `atelier.toml` file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub assets: FileAssetsConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
    pub dev_mode: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileAssetsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
}

/// Environment variable overrides, gathered once per load.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub asset_root: Option<PathBuf>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub dev_mode: Option<bool>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            config_path: var("ATELIER_CONFIG").map(PathBuf::from),
            server_host: var("ATELIER_HOST"),
            server_port: var("ATELIER_PORT").and_then(|v| v.parse().ok()),
            asset_root: var("ATELIER_ASSET_ROOT").map(PathBuf::from),
            cors_allowed_origins: var("ATELIER_CORS_ALLOWED_ORIGINS").map(|v| {
                v.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            }),
            dev_mode: var("ATELIER_DEV_MODE").map(|v| truthy(&v)),
        }
    }
}

fn var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_accepts_common_spellings() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(truthy(value), "{value} should be truthy");
        }
        for value in ["0", "false", "off", "nope", ""] {
            assert!(!truthy(value), "{value} should be falsy");
        }
    }

    #[test]
    fn file_config_parses_partial_documents() {
        let parsed: FileConfig = toml::from_str(
            r#"
            [server]
            port = 8080

            [assets]
            root = "/srv/portfolio/public"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.server.port, Some(8080));
        assert_eq!(
            parsed.assets.root.as_deref(),
            Some(std::path::Path::new("/srv/portfolio/public"))
        );
        assert!(parsed.server.host.is_none());
        assert!(parsed.dev_mode.is_none());
    }
}
