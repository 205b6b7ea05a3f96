use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct GoogleGeocodeResponseLocation {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleGeocodeResponseGeometry {
    pub location: GoogleGeocodeResponseLocation,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleGeocodeResponseResult {
    pub geometry: GoogleGeocodeResponseGeometry,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleGeocodeResponse {
    #[serde(default)]
    pub results: Vec<GoogleGeocodeResponseResult>,
}
