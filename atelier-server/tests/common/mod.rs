// Not every test binary uses every helper.
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::sync::Arc;

use axum_test::TestServer;

use atelier_config::{AssetsConfig, Config, ConfigMetadata, CorsConfig, ServerConfig};
use atelier_core::Catalog;
use atelier_server::{AppState, create_app};

pub fn test_config(asset_root: &Path) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        assets: AssetsConfig {
            root: asset_root.to_path_buf(),
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
        dev_mode: true,
        metadata: ConfigMetadata::default(),
    }
}

pub fn test_server(asset_root: &Path) -> TestServer {
    let state = AppState::new(
        Arc::new(Catalog::builtin()),
        Arc::new(test_config(asset_root)),
    );
    TestServer::new(create_app(state)).expect("router must start")
}

/// Write `bytes` at a catalog reference path (e.g. `/Bali/bali-1.jpeg`)
/// under the asset root.
pub fn write_asset(asset_root: &Path, reference: &str, bytes: &[u8]) {
    let path = asset_root.join(reference.trim_start_matches('/'));
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, bytes).unwrap();
}

pub const JPEG_HEADER: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
