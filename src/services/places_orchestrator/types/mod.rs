pub mod orchestrator_error;
pub mod orchestrator_state;
pub mod place;
