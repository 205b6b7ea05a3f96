use crate::{
    routes::PlacesStateResponse,
    types::app_state::AppState,
    utils::{app_error::AppError, validated_json::ValidatedJson},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::Deserialize;
use tracing::debug;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct PutQueryPayload {
    #[validate(length(max = 256, message = "Must be at most 256 characters"))]
    pub text: String,
}

#[cfg_attr(test, debug_handler)]
pub async fn put_query(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PutQueryPayload>,
) -> Result<Response, AppError> {
    debug!("Setting query to {:?}", payload.text);
    state.orchestrator.set_query(payload.text);

    Ok((
        StatusCode::ACCEPTED,
        Json(PlacesStateResponse {
            data: state.orchestrator.state(),
        }),
    )
        .into_response())
}
