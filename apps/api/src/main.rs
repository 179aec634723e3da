mod config;
mod document;
mod errors;
mod export;
mod form;
mod models;
mod preview;
mod routes;
mod session;
mod state;
mod storage;
mod theme;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StorageBackend};
use crate::export::{CommandRenderer, Exporter};
use crate::routes::build_router;
use crate::session::Session;
use crate::state::AppState;
use crate::storage::{FileStore, KeyValueStore, MemoryStore, RedisStore, ResumeRepository};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on invalid env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Builder v{}", env!("CARGO_PKG_VERSION"));

    // Persistence
    let store = open_store(&config).await?;
    info!("Storage backend: {}", store.backend());
    let repository = ResumeRepository::new(store);

    // Hydrate the session; anything unreadable starts empty
    let document = repository.load().await.unwrap_or_default();
    let session = Session::new(document, config.default_theme);
    info!("Default theme: {}", config.default_theme.as_str());

    // PDF export
    let renderer = Arc::new(
        CommandRenderer::new(&config.pdf_renderer_bin).no_sandbox(config.pdf_renderer_no_sandbox),
    );
    let exporter = Exporter::new(renderer, config.export_timeout);
    info!(
        "PDF renderer: {} (timeout {:?}, sandbox {})",
        config.pdf_renderer_bin,
        config.export_timeout,
        if config.pdf_renderer_no_sandbox { "off" } else { "on" }
    );

    let state = AppState::new(session, repository, exporter);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn open_store(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.storage_backend {
        StorageBackend::File => Arc::new(
            FileStore::open(&config.data_dir)
                .await
                .with_context(|| format!("cannot open data dir {}", config.data_dir.display()))?,
        ),
        StorageBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL is required for the redis backend")?;
            Arc::new(RedisStore::new(url, env!("CARGO_PKG_NAME")).context("invalid REDIS_URL")?)
        }
        StorageBackend::Memory => Arc::new(MemoryStore::default()),
    };
    Ok(store)
}
