pub mod orchestrator;
pub mod types;
