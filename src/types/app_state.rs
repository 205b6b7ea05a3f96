use crate::services::places_orchestrator::orchestrator::PlacesOrchestrator;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: PlacesOrchestrator,
}
