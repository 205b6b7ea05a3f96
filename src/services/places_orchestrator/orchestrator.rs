use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use futures::future::join_all;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use super::types::{
    orchestrator_error::OrchestratorError, orchestrator_state::OrchestratorState, place::Place,
};
use crate::services::maps_client::{
    maps_service::{
        AutocompleteSearchInput, Geocode, MapsService, MapsServiceConfig,
        DEFAULT_AUTOCOMPLETE_URL, DEFAULT_GEOCODING_URL,
    },
    types::maps_service_error::MapsServiceError,
};

const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Clone, Debug)]
pub struct OrchestratorConfig {
    /// Region allow-list sent as `includedRegionCodes`. Empty means unrestricted.
    pub countries: Vec<String>,
    pub gcp_api_key: String,
    pub language: String,
    pub debounce: Duration,
    pub autocomplete_url: String,
    pub geocoding_url: String,
    pub request_timeout: Duration,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            countries: Vec::new(),
            gcp_api_key: String::new(),
            language: "fr".to_string(),
            debounce: Duration::from_millis(1500),
            autocomplete_url: DEFAULT_AUTOCOMPLETE_URL.to_string(),
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Debounces query changes into autocomplete + geocode lookups and publishes
/// the result as an [`OrchestratorState`].
///
/// Every query change cancels the previous cycle. A cancelled cycle never
/// fires its fetch, and a fetch that was already running when it got
/// superseded has its results dropped instead of published.
#[derive(Clone)]
pub struct PlacesOrchestrator {
    inner: Arc<Inner>,
}

struct Inner {
    maps_service: MapsService,
    language: String,
    countries: Vec<String>,
    debounce: Duration,
    state: watch::Sender<OrchestratorState>,
    cycles: Mutex<Cycles>,
}

#[derive(Default)]
struct Cycles {
    current: Option<CancellationToken>,
    next_id: u64,
    // Cycle whose fetch most recently started.
    fetching: Option<u64>,
}

impl PlacesOrchestrator {
    pub fn new(config: OrchestratorConfig) -> Result<Self, OrchestratorError> {
        if config.gcp_api_key.is_empty() {
            return Err(OrchestratorError::MissingApiKey);
        }

        if config.language.is_empty() {
            return Err(OrchestratorError::EmptyLanguage);
        }

        if let Some(country) = config
            .countries
            .iter()
            .find(|c| c.len() != 2 || !c.chars().all(|ch| ch.is_ascii_alphabetic()))
        {
            return Err(OrchestratorError::InvalidCountry(country.clone()));
        }

        let maps_service = MapsService::new(MapsServiceConfig {
            api_key: config.gcp_api_key,
            autocomplete_url: config.autocomplete_url,
            geocoding_url: config.geocoding_url,
            request_timeout: config.request_timeout,
        })?;

        let (state, _) = watch::channel(OrchestratorState::default());

        Ok(Self {
            inner: Arc::new(Inner {
                maps_service,
                language: config.language,
                countries: config.countries,
                debounce: config.debounce,
                state,
                cycles: Mutex::new(Cycles::default()),
            }),
        })
    }

    pub fn state(&self) -> OrchestratorState {
        self.inner.state.borrow().clone()
    }

    /// Every state transition is sent to the returned receiver.
    pub fn subscribe(&self) -> watch::Receiver<OrchestratorState> {
        self.inner.state.subscribe()
    }

    /// Replaces the query and schedules a fetch after the debounce delay.
    ///
    /// Must be called from within a tokio runtime.
    pub fn set_query(&self, text: impl Into<String>) {
        let query = text.into();
        let mut cycles = self.inner.lock_cycles();

        if self.inner.state.borrow().query == query {
            return;
        }

        if let Some(token) = cycles.current.take() {
            token.cancel();
        }

        if query.is_empty() {
            debug!("Query cleared");
            self.inner.state.send_modify(|s| {
                s.query.clear();
                s.places.clear();
            });
            return;
        }

        self.inner.state.send_modify(|s| s.query = query.clone());

        let token = CancellationToken::new();
        cycles.next_id += 1;
        let id = cycles.next_id;
        cycles.current = Some(token.clone());
        drop(cycles);

        let inner = self.inner.clone();
        tokio::spawn(async move { inner.run_cycle(id, query, token).await });
    }
}

impl Inner {
    fn lock_cycles(&self) -> MutexGuard<'_, Cycles> {
        self.cycles.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn run_cycle(self: Arc<Self>, id: u64, query: String, token: CancellationToken) {
        tokio::select! {
            _ = token.cancelled() => {
                debug!("Debounce for {:?} cancelled", query);
                return;
            }
            _ = tokio::time::sleep(self.debounce) => {}
        }

        {
            let mut cycles = self.lock_cycles();
            if token.is_cancelled() {
                return;
            }
            cycles.fetching = Some(id);
            self.state.send_modify(|s| {
                s.loading = true;
                s.error = None;
            });
        }

        info!("Fetching places for {:?}", query);

        // Run on its own task so a panic still resets `loading`.
        let fetch = {
            let inner = self.clone();
            let query = query.clone();
            tokio::spawn(async move { inner.fetch_places(&query).await })
        };

        let outcome = match fetch.await {
            Ok(Ok(places)) => Ok(places),
            Ok(Err(e)) => {
                error!("Failed to fetch places for {:?}: {}", query, e);
                Err(e.to_string())
            }
            Err(e) => {
                error!("Place fetch for {:?} aborted: {}", query, e);
                Err(UNKNOWN_ERROR.to_string())
            }
        };

        let mut cycles = self.lock_cycles();
        let latest_fetch = cycles.fetching == Some(id);
        if latest_fetch {
            cycles.fetching = None;
        }

        if token.is_cancelled() {
            info!("Discarding results for superseded query {:?}", query);
            if latest_fetch {
                self.state.send_modify(|s| s.loading = false);
            }
            return;
        }

        self.state.send_modify(|s| {
            match outcome {
                Ok(places) => s.places = places,
                Err(message) => s.error = Some(message),
            }
            s.loading = false;
        });
    }

    async fn fetch_places(&self, query: &str) -> Result<Vec<Place>, MapsServiceError> {
        let suggestions = self
            .maps_service
            .get_autocomplete(AutocompleteSearchInput {
                input: query,
                language_code: &self.language,
                region_codes: &self.countries,
            })
            .await?
            .suggestions;

        // join_all yields in input order, not completion order.
        let geocodes = join_all(suggestions.iter().map(|s| {
            self.geocode_or_empty(&s.place_prediction.structured_format.main_text.text)
        }))
        .await;

        Ok(suggestions
            .into_iter()
            .zip(geocodes)
            .map(|(suggestion, geocode)| Place::from_suggestion(suggestion, geocode))
            .collect())
    }

    async fn geocode_or_empty(&self, address: &str) -> Geocode {
        match self.maps_service.get_geocode(address).await {
            Ok(geocode) => geocode,
            Err(e) => {
                warn!("Geocoding {:?} failed: {}", address, e);
                Geocode::default()
            }
        }
    }
}
