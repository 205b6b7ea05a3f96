use serde::{Deserialize, Serialize};

use super::place::Place;

/// Snapshot of what the consumer renders. `places` keeps autocomplete order.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrchestratorState {
    pub query: String,
    pub places: Vec<Place>,
    pub loading: bool,
    pub error: Option<String>,
}
