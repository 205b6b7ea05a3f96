use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GoogleAutocompleteText {
    pub text: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoogleAutocompleteStructuredFormat {
    pub main_text: GoogleAutocompleteText,
    // Google omits this for some establishments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_text: Option<GoogleAutocompleteText>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoogleAutocompletePlacePrediction {
    pub place_id: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub structured_format: GoogleAutocompleteStructuredFormat,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoogleAutocompleteSuggestion {
    pub place_prediction: GoogleAutocompletePlacePrediction,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleAutocompleteResponse {
    #[serde(default)]
    pub suggestions: Vec<GoogleAutocompleteSuggestion>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleAutocompleteRequest<'a> {
    pub input: &'a str,
    pub language_code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_region_codes: Option<&'a [String]>,
}
