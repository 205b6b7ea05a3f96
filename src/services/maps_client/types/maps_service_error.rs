use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapsServiceError {
    #[error("Failed to send request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("HTTP error {0}")]
    Status(u16),

    #[error("Failed to get response body: {0}")]
    Body(#[source] reqwest::Error),
}
