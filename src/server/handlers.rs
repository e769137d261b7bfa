use crate::core::JokeResponse;
use crate::server::AppState;
use crate::utils::error::RelayError;
use axum::extract::State;
use axum::Json;

pub async fn get_joke(State(state): State<AppState>) -> Result<Json<JokeResponse>, RelayError> {
    let joke = state.source.fetch_joke().await.map_err(|err| {
        tracing::error!(
            "Could not fetch joke: {} (Category: {:?})",
            err,
            err.category()
        );
        err
    })?;

    Ok(Json(joke))
}
