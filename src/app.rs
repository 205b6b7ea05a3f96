use std::{env, time::Duration};

use crate::{
    routes::apply_routes,
    services::{
        maps_client::maps_service::{DEFAULT_AUTOCOMPLETE_URL, DEFAULT_GEOCODING_URL},
        places_orchestrator::orchestrator::{OrchestratorConfig, PlacesOrchestrator},
    },
    types::app_state::AppState,
};
use axum::{routing::get, Router};
use thiserror::Error;
use tower_http::cors::CorsLayer;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    InvalidVar { name: &'static str, value: String },
}

pub struct AppConfig {
    pub orchestrator: OrchestratorConfig,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = OrchestratorConfig::default();

        let gcp_api_key = var("GCP_API_KEY").ok_or(ConfigError::MissingVar("GCP_API_KEY"))?;

        let countries = var("PLACES_COUNTRIES")
            .map(|v| {
                v.split(',')
                    .map(|c| c.trim().to_uppercase())
                    .filter(|c| !c.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let debounce = match var("PLACES_DEBOUNCE_MS") {
            Some(v) => Duration::from_millis(parse_u64("PLACES_DEBOUNCE_MS", v)?),
            None => defaults.debounce,
        };

        let request_timeout = match var("PLACES_REQUEST_TIMEOUT_SECS") {
            Some(v) => match parse_u64("PLACES_REQUEST_TIMEOUT_SECS", v.clone())? {
                0 => {
                    return Err(ConfigError::InvalidVar {
                        name: "PLACES_REQUEST_TIMEOUT_SECS",
                        value: v,
                    })
                }
                secs => Duration::from_secs(secs),
            },
            None => defaults.request_timeout,
        };

        Ok(AppConfig {
            orchestrator: OrchestratorConfig {
                countries,
                gcp_api_key,
                language: var("PLACES_LANGUAGE").unwrap_or(defaults.language),
                debounce,
                autocomplete_url: var("PLACES_AUTOCOMPLETE_URL")
                    .unwrap_or_else(|| DEFAULT_AUTOCOMPLETE_URL.to_string()),
                geocoding_url: var("PLACES_GEOCODING_URL")
                    .unwrap_or_else(|| DEFAULT_GEOCODING_URL.to_string()),
                request_timeout,
            },
            bind_addr: var("PLACES_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

fn parse_u64(name: &'static str, value: String) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidVar { name, value })
}

pub fn gen_app(orchestrator: PlacesOrchestrator) -> Router {
    let cors_middleware = CorsLayer::new();
    let state = AppState { orchestrator };

    apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .with_state(state)
}

async fn root() -> &'static str {
    "OK"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub orchestrator: PlacesOrchestrator,
    pub google_server: mockito::ServerGuard,
}

#[cfg(test)]
pub async fn gen_mock_app(debounce: Duration) -> MockApp {
    let google_server = mockito::Server::new_async().await;

    let orchestrator = PlacesOrchestrator::new(OrchestratorConfig {
        gcp_api_key: "key".to_string(),
        language: "en".to_string(),
        debounce,
        autocomplete_url: format!("{}/v1/places:autocomplete", google_server.url()),
        geocoding_url: format!("{}/maps/api/geocode/json", google_server.url()),
        ..Default::default()
    })
    .expect("Failed to build test orchestrator");

    MockApp {
        app: gen_app(orchestrator.clone()),
        orchestrator,
        google_server,
    }
}
