//! BugJudge - Application Entry Point
//!
//! This is the main entry point for the BugJudge server.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bugjudge::{
    audit::ErrorLog,
    config::{LogFormat, CONFIG},
    create_router, db,
    executor::PistonClient,
    services::Judge,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let json = CONFIG.server.log_format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();

    tracing::info!("Starting BugJudge server...");

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&CONFIG.database).await?;
    db::test_connection(&db_pool).await?;

    // Run database migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&db_pool).await?;

    // Sandbox client and error audit trail
    let executor = PistonClient::new(&CONFIG.sandbox)?;
    tracing::info!(url = %CONFIG.sandbox.url, "Using Piston sandbox");

    let error_log = ErrorLog::new(&CONFIG.audit.error_log_path);
    tracing::info!(path = %error_log.path().display(), "Error log ready");

    if CONFIG.admin.token.is_none() {
        tracing::warn!("ADMIN_TOKEN is not set; admin routes will reject every request");
    }

    let judge = Judge::new(
        Arc::new(executor),
        Arc::new(error_log),
        CONFIG.judge.max_parallel_cases,
    );

    // Create application state and router
    let state = AppState::new(db_pool.clone(), judge, CONFIG.clone());
    let app = create_router(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Closing database pool");
    db_pool.close().await;

    Ok(())
}

/// Resolves on SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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

    tracing::info!("Shutdown signal received");
}
