use crate::{
    services::places_orchestrator::types::orchestrator_state::OrchestratorState,
    types::app_state::AppState,
};
use axum::{extract::State, Json};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct PlacesStateResponse {
    pub data: OrchestratorState,
}

#[cfg_attr(test, debug_handler)]
pub async fn get_places(State(state): State<AppState>) -> Json<PlacesStateResponse> {
    Json(PlacesStateResponse {
        data: state.orchestrator.state(),
    })
}
