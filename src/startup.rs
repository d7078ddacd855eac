//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;

use crate::application::services::{CatalogService, CatalogServiceImpl, RollProcessor, RollService};
use crate::config::Settings;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{PgCatalogRepository, PgSpellRepository};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub roller: Arc<dyn RollService>,
    pub catalog: Arc<dyn CatalogService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Wire the Postgres-backed services onto a pool.
    pub fn new(db: PgPool, settings: Settings) -> Self {
        let spell_repo = Arc::new(PgSpellRepository::new(db.clone()));
        let catalog_repo = Arc::new(PgCatalogRepository::new(db.clone()));

        let roller = RollProcessor::new(spell_repo).with_dice_limit(settings.dice.max_dice);
        let catalog = CatalogServiceImpl::new(catalog_repo);

        Self {
            db,
            roller: Arc::new(roller),
            catalog: Arc::new(catalog),
            settings: Arc::new(settings),
        }
    }
}

/// Build the router with its middleware stack
pub fn build_router(state: AppState) -> Router {
    let cors = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state)
        .layer(CompressionLayer::new())
        .layer(logging::create_trace_layer())
        .layer(cors)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        // Create database pool
        let db = database::create_pool(&settings.database).await?;
        tracing::info!(
            max_connections = settings.database.max_connections,
            "Database connection pool created"
        );

        let addr: SocketAddr = settings.server.socket_addr()?;
        let state = AppState::new(db, settings);
        let router = build_router(state);

        // Bind to address
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Server stopped");
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Resolve on Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
