use serde::{Deserialize, Serialize};

use crate::services::maps_client::{
    maps_service::Geocode,
    types::google_autocomplete_response::{
        GoogleAutocompleteStructuredFormat, GoogleAutocompleteSuggestion,
    },
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    pub full_address: String,
    pub types: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub raw: GoogleAutocompleteSuggestion,
    #[serde(rename = "address_components")]
    pub address_components: GoogleAutocompleteStructuredFormat,
}

impl Place {
    pub fn from_suggestion(suggestion: GoogleAutocompleteSuggestion, geocode: Geocode) -> Self {
        let prediction = &suggestion.place_prediction;
        let format = &prediction.structured_format;
        let name = format.main_text.text.clone();

        let full_address = match &format.secondary_text {
            Some(secondary) => format!("{}, {}", name, secondary.text),
            None => name.clone(),
        };

        Place {
            id: prediction.place_id.clone(),
            name,
            full_address,
            types: prediction.types.clone(),
            latitude: geocode.lat,
            longitude: geocode.lng,
            address_components: format.clone(),
            raw: suggestion,
        }
    }
}
