//! Thin HTTP server
//!
//! Directory listing, paged photo listing, deletion and raw file serving,
//! all confined to one root directory. Each request is handled independently;
//! there is no session state.

pub mod error;
pub mod handlers;
pub mod wire;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{delete, get};
use axum::Router;
use tokio::net::TcpListener;

pub use error::ServerError;

#[derive(Debug, Clone)]
pub struct ServerState {
    /// Sandbox root every request path resolves against
    pub root: Arc<PathBuf>,
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let response = next.run(request).await;
    log::info!("{} {} -> {}", method, uri, response.status().as_u16());
    response
}

/// Build the application router for `root`
pub fn router(root: PathBuf) -> Router {
    let state = ServerState {
        root: Arc::new(root),
    };

    Router::new()
        .route("/api/list", get(handlers::list))
        .route("/api/photos", get(handlers::photos))
        .route("/api/delete-file", delete(handlers::delete_file))
        .route("/files/*path", get(handlers::files))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

/// Serve `root` on an already bound listener until the task is dropped
pub async fn serve_listener(listener: TcpListener, root: PathBuf) -> std::io::Result<()> {
    let root = tokio::fs::canonicalize(&root).await.unwrap_or(root);
    log::info!(
        "Serving {} on http://{}",
        root.display(),
        listener.local_addr()?
    );
    axum::serve(listener, router(root)).await
}

/// Bind `addr` and serve `root`
pub async fn serve(addr: SocketAddr, root: PathBuf) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve_listener(listener, root).await
}
