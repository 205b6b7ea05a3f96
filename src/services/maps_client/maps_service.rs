use std::time::Duration;

use tracing::debug;
use urlencoding::encode;

use super::types::{
    google_autocomplete_response::{
        GoogleAutocompleteRequest, GoogleAutocompleteResponse, GoogleAutocompleteSuggestion,
    },
    google_geocode_response::GoogleGeocodeResponse,
    maps_service_error::MapsServiceError,
};

pub const DEFAULT_AUTOCOMPLETE_URL: &str = "https://places.googleapis.com/v1/places:autocomplete";
pub const DEFAULT_GEOCODING_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

#[derive(Clone)]
pub struct MapsServiceConfig {
    pub api_key: String,
    pub autocomplete_url: String,
    pub geocoding_url: String,
    pub request_timeout: Duration,
}

#[derive(Clone)]
pub struct MapsService {
    config: MapsServiceConfig,
    client: reqwest::Client,
}

pub struct AutocompleteSearchInput<'a> {
    pub input: &'a str,
    pub language_code: &'a str,
    pub region_codes: &'a [String],
}

pub struct AutocompleteSearchOutput {
    pub suggestions: Vec<GoogleAutocompleteSuggestion>,
}

/// Coordinates of the first geocoding match. Both fields are `None` when
/// there was no match.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geocode {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl MapsService {
    pub fn new(config: MapsServiceConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { config, client })
    }

    pub async fn get_autocomplete(
        &self,
        input: AutocompleteSearchInput<'_>,
    ) -> Result<AutocompleteSearchOutput, MapsServiceError> {
        let url = format!(
            "{}?input={}&languageCode={}",
            self.config.autocomplete_url,
            encode(input.input),
            encode(input.language_code),
        );

        let body = GoogleAutocompleteRequest {
            input: input.input,
            language_code: input.language_code,
            included_region_codes: (!input.region_codes.is_empty()).then_some(input.region_codes),
        };

        let resp = self
            .client
            .post(&url)
            .header("X-Goog-Api-Key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(MapsServiceError::Request)?;

        if !resp.status().is_success() {
            return Err(MapsServiceError::Status(resp.status().as_u16()));
        }

        let body = resp
            .json::<GoogleAutocompleteResponse>()
            .await
            .map_err(MapsServiceError::Body)?;

        debug!(
            "Autocomplete returned {} suggestions",
            body.suggestions.len()
        );

        Ok(AutocompleteSearchOutput {
            suggestions: body.suggestions,
        })
    }

    pub async fn get_geocode(&self, address: &str) -> Result<Geocode, MapsServiceError> {
        let url = format!(
            "{}?address={}&key={}",
            self.config.geocoding_url,
            encode(address),
            encode(&self.config.api_key),
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(MapsServiceError::Request)?;

        if !resp.status().is_success() {
            return Err(MapsServiceError::Status(resp.status().as_u16()));
        }

        let body = resp
            .json::<GoogleGeocodeResponse>()
            .await
            .map_err(MapsServiceError::Body)?;

        Ok(body
            .results
            .first()
            .map(|r| Geocode {
                lat: Some(r.geometry.location.lat),
                lng: Some(r.geometry.location.lng),
            })
            .unwrap_or_default())
    }
}
