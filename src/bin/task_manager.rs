//! Serves the task manager HTTP API.
//!
//! Configuration is read from the environment (see
//! [`task_manager::config`]). With `PERSISTENCE_ENABLED` set, tasks are
//! stored in `PostgreSQL` at `DATABASE_URL` and the `tasks` table is created
//! on startup when missing; otherwise they live in memory until the process
//! exits.

use std::sync::Arc;

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use task_manager::api::{AppState, create_router};
use task_manager::config::AppConfig;
use task_manager::task::{
    adapters::{
        memory::InMemoryTaskStore,
        postgres::{PostgresTaskStore, TaskPgPool, ensure_schema},
    },
    ports::TaskStore,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

const DEFAULT_LOG_FILTER: &str = "info,task_manager=debug";

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let store = build_store(&config).await?;
    let app = create_router(AppState::new(store)).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "task manager listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("task manager stopped");
    Ok(())
}

async fn build_store(config: &AppConfig) -> Result<Arc<dyn TaskStore>, BoxError> {
    if !config.persistence_enabled {
        tracing::info!("using in-memory task store");
        return Ok(Arc::new(InMemoryTaskStore::new()));
    }

    let manager = ConnectionManager::<PgConnection>::new(config.database_url.clone());
    let pool_size = config.database_pool_size;
    let pool: TaskPgPool =
        tokio::task::spawn_blocking(move || Pool::builder().max_size(pool_size).build(manager))
            .await??;
    let store = PostgresTaskStore::new(pool);
    ensure_schema(&store).await?;
    tracing::info!(pool_size, "using PostgreSQL task store");
    Ok(Arc::new(store))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
