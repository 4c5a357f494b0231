use crate::{
    dto::{envelope, DataEnvelope},
    errors::ApiError,
    state::AppState,
};
use axum::{extract::State, Json};
use tracing::instrument;

#[instrument(skip(state), name = "api_get_greeting")]
pub async fn get_greeting(
    State(state): State<AppState>,
) -> Result<Json<DataEnvelope<String>>, ApiError> {
    let value = state.get_greeting.execute().await?;
    Ok(envelope(value))
}
