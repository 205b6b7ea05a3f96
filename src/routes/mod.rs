use axum::{
    routing::{get, put},
    Router,
};

use crate::types::app_state::AppState;

mod get_places;
mod put_query;

pub use get_places::PlacesStateResponse;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/places", get(get_places::get_places))
        .route("/query", put(put_query::put_query))
}
