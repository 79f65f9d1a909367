use std::future::IntoFuture;
use std::net::SocketAddr;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tabula_api::config::ServerConfig;
use tabula_api::router::build_app_router;
use tabula_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tabula_api=debug,tabula_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let pool = tabula_db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    tabula_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    tabula_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- App state ---
    let state = AppState { pool: pool.clone() };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    let (signal_tx, mut signal_rx) = tokio::sync::watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = signal_tx.send(true);
    });

    // In-flight requests get `shutdown_timeout_secs` to finish once a signal arrives.
    let drain_deadline = async {
        if signal_rx.wait_for(|fired| *fired).await.is_ok() {
            tokio::time::sleep(Duration::from_secs(config.shutdown_timeout_secs)).await;
        } else {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        result = server.into_future() => result.expect("Server error"),
        () = drain_deadline => {
            tracing::warn!(
                timeout_secs = config.shutdown_timeout_secs,
                "Shutdown timeout elapsed, dropping remaining connections"
            );
        }
    }

    // --- Post-shutdown cleanup ---
    pool.close().await;
    tracing::info!("Database pool closed, graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
