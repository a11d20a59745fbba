//! Configuration loading: defaults, file discovery, environment overrides.

use std::{fs, path::PathBuf};

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::models::{AssetsConfig, Config, ConfigMetadata, CorsConfig, ServerConfig};
use crate::sources::{EnvConfig, FileConfig};
use crate::validation::{self, ConfigWarnings};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("atelier.toml"),
        PathBuf::from("config/atelier.toml"),
    ]
});

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ASSET_ROOT: &str = "./public";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file not found: {}", path.display())]
    MissingConfig { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to load .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

/// A loaded configuration together with its non-fatal warnings.
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = dotenvy::dotenv().map(|_| true).or_else(|err| match err {
            dotenvy::Error::Io(_) => Ok(false),
            _ => Err(err),
        })?;

        let env = EnvConfig::gather();
        let (file, config_path) = self.load_file_config(&env)?;

        Ok(compose(file, env, config_path, env_file_loaded))
    }

    /// Resolve and parse the config file: an explicit path must exist, a
    /// path from the environment or the default search list may be absent.
    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let (candidate, explicit) = if let Some(path) = &self.config_path {
            (Some(path.clone()), true)
        } else if let Some(path) = &env.config_path {
            (Some(path.clone()), true)
        } else {
            let found = DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
                .cloned();
            (found, false)
        };

        let Some(path) = candidate else {
            return Ok((None, None));
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        let contents = fs::read_to_string(&path).map_err(|err| ConfigLoadError::Io {
            path: path.clone(),
            source: err,
        })?;
        let file: FileConfig =
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                path: path.clone(),
                source: err,
            })?;

        Ok((Some(file), Some(path)))
    }
}

/// Compose defaults, file values, and environment overrides into the
/// resolved [`Config`]. Environment wins over file, file over defaults.
fn compose(
    file: Option<FileConfig>,
    env: EnvConfig,
    config_path: Option<PathBuf>,
    env_file_loaded: bool,
) -> ConfigLoad {
    let mut warnings = ConfigWarnings::default();

    if config_path.is_none() {
        warnings.push_with_hint(
            "no atelier.toml detected; using defaults and environment variables",
            "Create atelier.toml or point ATELIER_CONFIG at one",
        );
    }

    let file = file.unwrap_or_default();

    let server = ServerConfig {
        host: env
            .server_host
            .or(file.server.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: env.server_port.or(file.server.port).unwrap_or(DEFAULT_PORT),
    };

    let assets = AssetsConfig {
        root: env
            .asset_root
            .or(file.assets.root)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_ROOT)),
    };

    let cors = CorsConfig {
        allowed_origins: env
            .cors_allowed_origins
            .or(file.cors.allowed_origins)
            .unwrap_or_default(),
    };

    let dev_mode = env.dev_mode.or(file.dev_mode).unwrap_or(false);

    let config = Config {
        server,
        assets,
        cors,
        dev_mode,
        metadata: ConfigMetadata {
            config_path,
            env_file_loaded,
        },
    };

    validation::check(&config, &mut warnings);

    ConfigLoad { config, warnings }
}
