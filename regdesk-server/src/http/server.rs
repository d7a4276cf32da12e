//! Axum server setup
//!
//! Startup order: connect the pool, ensure the schema, bind, serve until
//! Ctrl+C or SIGTERM, then close the pool.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::{self, DbError, UserRepo};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8080)
    pub bind_addr: SocketAddr,

    /// PostgreSQL connection string
    pub database_url: String,

    /// Maximum pooled connections
    pub max_connections: u32,

    /// Directory served for every path without a route (default: ".")
    pub static_root: PathBuf,

    /// User list template; relative paths resolve against `static_root`
    pub template_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            database_url: "postgres://postgres@localhost/adv_database".to_string(),
            max_connections: db::pool::DEFAULT_MAX_CONNECTIONS,
            static_root: PathBuf::from("."),
            template_path: PathBuf::from("userList.html"),
        }
    }
}

impl ServerConfig {
    /// Template location after resolving against the static root.
    pub fn resolved_template_path(&self) -> PathBuf {
        if self.template_path.is_absolute() {
            self.template_path.clone()
        } else {
            self.static_root.join(&self.template_path)
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub static_root: PathBuf,
    pub template_path: PathBuf,
}

/// Build the application router.
pub fn build_router(pool: PgPool, config: &ServerConfig) -> Router {
    let state = AppState {
        pool,
        static_root: config.static_root.clone(),
        template_path: config.resolved_template_path(),
    };

    Router::new()
        .merge(routes::register::router())
        .merge(routes::users::router())
        .fallback(routes::static_files::serve_static)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let config = ServerConfig {
///     database_url: "postgres://localhost/adv_database".into(),
///     ..ServerConfig::default()
/// };
/// run_server(config).await?;
/// ```
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let pool = db::create_pool_with_options(&config.database_url, config.max_connections)
        .await
        .map_err(ServerError::Connect)?;

    db::ensure_schema(&pool).await.map_err(ServerError::Schema)?;

    match UserRepo::new(&pool).count().await {
        Ok(count) => tracing::info!(users = count, "User table ready"),
        Err(e) => tracing::warn!("Failed to count stored users: {}", e),
    }

    let result = serve(pool.clone(), &config).await;

    pool.close().await;
    tracing::info!("Database pool closed");
    result
}

async fn serve(pool: PgPool, config: &ServerConfig) -> Result<(), ServerError> {
    let app = build_router(pool, config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        static_root = %config.static_root.display(),
        template = %config.resolved_template_path().display(),
        "Server listening on {}",
        config.bind_addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Startup error type. Any of these aborts the process.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to create user table: {0}")]
    Schema(#[source] DbError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
