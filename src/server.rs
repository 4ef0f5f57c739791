//! HTTP server assembly and lifecycle.

use axum::Router;
use eyre::WrapErr;
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

use crate::{
    api,
    config::ServerConfig,
    task::{
        adapters::memory::InMemoryTaskRepository,
        ports::TaskRepository,
        services::{TaskService, TaskServiceResult},
    },
};

/// Task service backed by the in-memory store and the system clock.
pub type DemoTaskService = TaskService<InMemoryTaskRepository, DefaultClock>;

/// Creates the in-memory task service, seeding it when configured to.
///
/// # Errors
///
/// Returns an error when seeding fails.
pub async fn build_service(config: &ServerConfig) -> TaskServiceResult<DemoTaskService> {
    let service = TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    );
    if config.seed_demo_tasks {
        service.seed_demo_tasks().await?;
    }
    Ok(service)
}

/// Composes the API router with static file serving, CORS, and request
/// tracing.
///
/// Paths not claimed by the API fall through to `config.static_dir`.
pub fn app<R, C>(tasks: TaskService<R, C>, config: &ServerConfig) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    api::router(tasks)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Runs the server until Ctrl-C is received.
///
/// # Errors
///
/// Returns an error when seeding fails, the listener cannot be bound, or
/// the server terminates abnormally.
pub async fn run(config: ServerConfig) -> eyre::Result<()> {
    let tasks = build_service(&config)
        .await
        .wrap_err("failed to initialise task store")?;

    if !config.static_dir.is_dir() {
        warn!(static_dir = %config.static_dir.display(), "static directory not found");
    }

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("failed to bind {addr}"))?;
    let local_addr = listener.local_addr()?;
    info!(%local_addr, "server listening");
    info!("task API available at http://{local_addr}{}", api::TASKS_PATH);

    axum::serve(listener, app(tasks, &config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("server terminated unexpectedly")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
