//! # DnD Reference Server
//!
//! Entry point that initializes:
//! - Configuration loading
//! - Tracing/logging subsystem
//! - Database connection pool
//! - HTTP server

use anyhow::Result;
use tracing::info;

use dnd_reference::config::Settings;
use dnd_reference::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment and config files
    let settings = Settings::load()?;

    // Initialize tracing subscriber for structured logging
    dnd_reference::telemetry::init_tracing(settings.log_format);

    info!(
        addr = %settings.server_addr(),
        environment = %settings.environment,
        max_dice = settings.dice.max_dice,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
