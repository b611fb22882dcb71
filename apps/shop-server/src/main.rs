use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use shop_api::{build_router, AppState};
use shop_infrastructure::{create_pool, run_migrations, LocalFileStore};
use shop_shared::config::AppConfig;
use shop_shared::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (.env first, then config files, then SHOP__* variables)
    let config = AppConfig::load().context("failed to load configuration")?;

    // Initialize telemetry; the guard flushes the log file on exit
    let _log_guard = init_telemetry(&config.logging)?;

    info!("{} starting ({})", config.app.name, config.app.env);
    if !config.is_production() && config.cors.allowed_origins.is_empty() {
        warn!("CORS allows any origin; set cors.allowed_origins before deploying");
    }

    // Connect to Database
    info!("Connecting to database at {}...", config.database.url);
    let pool = create_pool(&config.database.url, config.database.max_connections)
        .await
        .context("failed to open database")?;
    run_migrations(&pool).await.context("failed to run migrations")?;
    info!("Database ready.");

    let file_store = LocalFileStore::new(&config.upload.dir, &config.upload.public_path)
        .await
        .with_context(|| format!("failed to create upload dir {}", config.upload.dir))?;

    let host: std::net::IpAddr = config.app.host.parse().context("invalid app.host")?;
    let addr = SocketAddr::from((host, config.app.port));
    let bootstrap = config.bootstrap.clone();

    // Create App State
    let state = AppState::new(config, pool, Arc::new(file_store));

    if let (Some(username), Some(password)) = (&bootstrap.admin_username, &bootstrap.admin_password) {
        if state.user_service.bootstrap_admin(username, password).await? {
            info!("Bootstrap admin {} is ready", username);
        }
    }

    let app = build_router(state);

    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
