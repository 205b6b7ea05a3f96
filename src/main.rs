mod app;
mod routes;
mod services;
mod types;
mod utils;

use services::places_orchestrator::orchestrator::PlacesOrchestrator;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    info!("Starting app...");

    let config = app::AppConfig::from_env()?;
    let orchestrator = PlacesOrchestrator::new(config.orchestrator)?;

    let mut updates = orchestrator.subscribe();
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let (query, places, loading) = {
                let state = updates.borrow_and_update();
                (state.query.clone(), state.places.len(), state.loading)
            };
            debug!("State updated: query={:?} places={} loading={}", query, places, loading);
        }
    });

    let app = app::gen_app(orchestrator);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
