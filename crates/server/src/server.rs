use axum::{
    Router,
    routing::{get, post, put},
};

use std::sync::Arc;

use crate::{ledger, projects, snapshot, tasks};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

async fn health() -> &'static str {
    "ok"
}

fn api(state: ServerState) -> Router {
    Router::new()
        .route("/data", get(snapshot::get))
        .route("/income", post(ledger::income_new))
        .route("/expenses", post(ledger::expense_new))
        .route("/projects", post(projects::project_new))
        .route("/projects/save", post(projects::save))
        .route("/projects/{id}", axum::routing::delete(projects::delete))
        .route("/tasks", post(tasks::task_new))
        .route("/tasks/{id}", put(tasks::set_status))
        .with_state(state)
}

/// The full HTTP surface: the API under `/api` plus a liveness probe.
pub fn router(engine: Engine) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
    };

    Router::new()
        .nest("/api", api(state))
        .route("/health", get(health))
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
