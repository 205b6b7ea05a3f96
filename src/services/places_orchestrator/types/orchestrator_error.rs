use thiserror::Error;

pub const NO_GCP_API_KEY_ERROR: &str = "NO_GCP_API_KEY_ERROR";
pub const NO_LANG_ERROR: &str = "You should not set language to empty string";

/// Configuration errors raised while building a [`PlacesOrchestrator`].
///
/// [`PlacesOrchestrator`]: crate::services::places_orchestrator::orchestrator::PlacesOrchestrator
#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("{}", NO_GCP_API_KEY_ERROR)]
    MissingApiKey,

    #[error("{}", NO_LANG_ERROR)]
    EmptyLanguage,

    #[error("Invalid region code '{0}', expected two ASCII letters")]
    InvalidCountry(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
