//! In-memory todo list HTTP service.
//!
//! # Overview
//! Five endpoints (list, get, create, update, delete) over a process-local
//! collection. Nothing is persisted: the collection is created when the
//! server starts and dropped when it stops.
//!
//! # Design
//! - `TodoStore` owns the collection and the id generator behind one lock;
//!   handlers share it through `Arc` as axum state.
//! - Request bodies are decoded leniently (see `model::TodoInput`); no
//!   request is rejected for its body. Failures are empty-bodied 404s, plus
//!   a 503 once the random id space is used up.
//! - `serve_with_shutdown` takes the shutdown future as a parameter so tests
//!   can stop the server without sending signals.

pub mod config;
pub mod error;
pub mod model;
pub mod routes;
pub mod store;

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{error, info};

pub use config::{Config, ConfigError};
pub use error::StoreError;
pub use model::{Todo, TodoInput};
pub use store::{IdStrategy, TodoStore, ID_SPACE};

/// Router over a fresh, empty store using random ids.
pub fn app() -> Router {
    app_with_store(Arc::new(TodoStore::default()))
}

pub fn app_with_store(store: Arc<TodoStore>) -> Router {
    routes::router(store)
}

/// Serve until SIGINT or SIGTERM.
pub async fn run(listener: TcpListener, id_strategy: IdStrategy) -> Result<(), std::io::Error> {
    serve_with_shutdown(listener, id_strategy, shutdown_signal()).await
}

/// Serve on `listener` until `shutdown` resolves, then drain in-flight
/// requests and discard the collection.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    id_strategy: IdStrategy,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let store = Arc::new(TodoStore::new(id_strategy));
    let addr = listener.local_addr()?;
    info!(%addr, ?id_strategy, "todo service started");

    axum::serve(listener, app_with_store(Arc::clone(&store)))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!(discarded = store.len().await, "todo service stopped");
    Ok(())
}

/// Resolves on the first SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(%err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = sigterm => {}
    }
    info!("shutdown signal received, draining connections");
}
