use crate::server::handlers::get_joke;
use crate::server::AppState;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

pub const JOKE_PATH: &str = "/joke";

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(JOKE_PATH, get(get_joke))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
