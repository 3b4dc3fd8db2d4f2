//! HTTP surface: server-rendered pages over the same core logic the CLI uses.

pub mod error;
pub mod handlers;
pub mod views;

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Shared per-process state. Holds only the database location: every request
/// opens (and drops) its own connection.
#[derive(Clone)]
pub struct AppState {
    pub db_path: String,
}

impl AppState {
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Run `func` against a fresh connection on the blocking pool.
    pub async fn with_pool<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut DbPool) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let path = self.db_path.clone();
        tokio::task::spawn_blocking(move || {
            let mut pool = DbPool::new(&path)?;
            func(&mut pool)
        })
        .await
        .map_err(|e| AppError::Server(format!("database task failed: {}", e)))?
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/system", get(handlers::system))
        .route("/healthz", get(handlers::healthz))
        .route("/habits", get(handlers::list_habits).post(handlers::create_habit))
        .route("/habits/delete", post(handlers::delete_habit))
        .route("/table", get(handlers::week_table))
        .route("/toggle", post(handlers::toggle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rhabits=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("cannot listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

/// Bind `addr` and serve until ctrl-c.
pub async fn serve(addr: &str, db_path: String) -> AppResult<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Server(format!("cannot bind {}: {}", addr, e)))?;

    info!(database = %db_path, "rhabits listening on http://{}", addr);

    axum::serve(listener, build_router(AppState::new(db_path)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    Ok(())
}
