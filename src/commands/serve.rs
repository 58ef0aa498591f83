//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }

    // Initialize database (migrations run on connect)
    let db = Arc::new(Database::connect(&config.database_url).await?);

    tokio::fs::create_dir_all(&config.upload_folder).await?;
    tracing::info!(upload_folder = %config.upload_folder.display(), "Upload folder ready");

    match &config.mail {
        Some(mail) => tracing::info!(server = %mail.server, port = mail.port, tls = mail.use_tls, "Mail settings loaded"),
        None => tracing::info!("Mail settings not configured"),
    }

    let addr = config.server_addr();
    let app = create_router(AppState::from_config(db, config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
