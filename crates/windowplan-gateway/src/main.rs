use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use windowplan_core::config::{StoreBackend, WindowplanConfig};
use windowplan_schedule::{InMemoryScheduleStore, ScheduleStore, SqliteScheduleStore};
use windowplan_window::{FixedWindowLookup, HttpWindowLookup, MaintenanceWindowLookup};

mod app;
mod http;
mod planner;

/// HTTP gateway for computing and storing maintenance-window schedules.
#[derive(Debug, Parser)]
#[command(name = "windowplan-gateway", version)]
struct Args {
    /// Path to windowplan.toml (default: ~/.windowplan/windowplan.toml).
    #[arg(long, env = "WINDOWPLAN_CONFIG")]
    config: Option<String>,

    /// Override gateway.bind.
    #[arg(long)]
    bind: Option<String>,

    /// Override gateway.port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "windowplan_gateway=info,tower_http=debug".into()),
        )
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let store = build_store(&config)?;
    let windows = build_window_lookup(&config)?;
    let planner = planner::SchedulePlanner::new(store, windows);

    let state = Arc::new(app::AppState::new(planner));
    let router = app::build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.gateway.bind, config.gateway.port).parse()?;
    info!("windowplan gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("windowplan gateway stopped");
    Ok(())
}

/// Load the config file and apply CLI overrides.
///
/// A missing file yields defaults; a file that fails to parse or validate is
/// fatal, so a configured backend is never silently swapped for another.
fn load_config(args: &Args) -> anyhow::Result<WindowplanConfig> {
    let mut config = WindowplanConfig::load(args.config.as_deref())
        .context("failed to load windowplan config")?;
    if let Some(bind) = &args.bind {
        config.gateway.bind = bind.clone();
    }
    if let Some(port) = args.port {
        config.gateway.port = port;
    }
    Ok(config)
}

/// Pick the schedule store backend from config.
fn build_store(config: &WindowplanConfig) -> anyhow::Result<Arc<dyn ScheduleStore>> {
    match config.store.backend {
        StoreBackend::Memory => {
            info!("schedule store: in-memory (schedules are lost on restart)");
            Ok(Arc::new(InMemoryScheduleStore::new()))
        }
        StoreBackend::Sqlite => {
            let path = &config.store.path;
            ensure_parent_dir(path);
            info!(path = %path, "schedule store: SQLite");
            Ok(Arc::new(SqliteScheduleStore::open(path)?))
        }
    }
}

/// Fixed window when configured, otherwise the locator-backed HTTP lookup.
fn build_window_lookup(
    config: &WindowplanConfig,
) -> anyhow::Result<Arc<dyn MaintenanceWindowLookup>> {
    if let Some(hours) = config.window.fixed_length_hours {
        info!(length_in_hours = hours, "maintenance window: fixed");
        return Ok(Arc::new(FixedWindowLookup::new(hours)));
    }
    info!(
        locator = %config.window.locator_base_url,
        service = %config.window.service_name,
        "maintenance window: resolved via service locator"
    );
    Ok(Arc::new(HttpWindowLookup::new(&config.window)?))
}

/// Ensure the parent directory for a file path exists.
fn ensure_parent_dir(path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::warn!(path = %parent.display(), error = %e, "could not create database directory");
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
