pub mod maps_client;
pub mod places_orchestrator;
