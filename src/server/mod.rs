pub mod handlers;
pub mod routes;

use crate::core::JokeSource;
use crate::utils::error::Result;
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

pub use routes::build_router;

/// Shared by every request. The source is stateless and safe to use from
/// concurrent handlers.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn JokeSource>,
}

impl AppState {
    pub fn new<S: JokeSource + 'static>(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}

/// Serves `router` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::info!("🚀 Listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}
