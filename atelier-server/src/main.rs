//! # Atelier Server
//!
//! Portfolio catalog server.
//!
//! ## Overview
//!
//! Atelier serves a photographer's portfolio catalog:
//!
//! - **Catalog API**: collections, featured subset, slug lookup, tags, and
//!   showcase search over a versioned JSON surface
//! - **Image Delivery**: photo assets resolved through the catalog and
//!   content-verified before serving
//! - **Asset Validation**: a pre-deploy check that every referenced image
//!   exists under the asset root
//!
//! ## Architecture
//!
//! The server is built on Axum. The catalog is an immutable in-memory table
//! constructed at startup; there is no database and no mutable shared state.

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atelier_config::{Config, ConfigLoad, ConfigLoader};
use atelier_core::{Catalog, validate_assets};
use atelier_server::{AppState, create_app};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "atelier-server")]
#[command(about = "Portfolio catalog server with validated image delivery")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Server port (overrides config)
    #[arg(short, long, env = "ATELIER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "ATELIER_HOST")]
    host: Option<String>,

    /// Path to a configuration file
    #[arg(long, env = "ATELIER_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that every catalog-referenced image exists under the asset root
    ValidateAssets {
        /// Report problems without failing the process
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_runtime_config(&cli.serve)?;

    match cli.command {
        Some(Command::ValidateAssets { dry_run }) => run_validate_assets(&config, dry_run),
        None => run_server(config).await,
    }
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<Arc<Config>> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &args.config {
        loader = loader.with_config_path(path);
    }
    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                // Quieter defaults; override via RUST_LOG.
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = config.metadata.config_path.as_ref() {
        info!(path = %path.display(), "configuration file loaded");
    }

    if !warnings.is_empty() {
        for warning in &warnings.items {
            match &warning.hint {
                Some(hint) => {
                    warn!(message = %warning.message, hint = %hint, "configuration warning")
                }
                None => {
                    warn!(message = %warning.message, "configuration warning")
                }
            }
        }
    }

    info!("Asset root: {}", config.asset_root().display());

    Ok(Arc::new(config))
}

async fn run_server(config: Arc<Config>) -> anyhow::Result<()> {
    let catalog = Arc::new(Catalog::builtin());
    info!(
        collections = catalog.collections().len(),
        photos = catalog
            .collections()
            .iter()
            .map(|c| c.photos.len())
            .sum::<usize>(),
        "catalog constructed"
    );

    let state = AppState::new(catalog, Arc::clone(&config));
    let router = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    info!(
        "Starting Atelier portfolio server on {}:{}",
        config.server.host, config.server.port
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn run_validate_assets(config: &Config, dry_run: bool) -> anyhow::Result<()> {
    let catalog = Catalog::builtin();
    info!(root = %config.asset_root().display(), "validating catalog assets");

    let report = validate_assets(&catalog, config.asset_root());

    for warning in &report.warnings {
        warn!("{warning}");
    }
    for problem in &report.errors {
        error!("{problem}");
    }
    info!("{report}");

    if report.has_errors() {
        if dry_run {
            warn!("dry run completed with errors; not failing the process");
        } else {
            anyhow::bail!(
                "asset validation failed with {} errors",
                report.errors.len()
            );
        }
    }

    Ok(())
}
