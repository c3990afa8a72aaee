//! HTTP transport.
//!
//! Routes:
//! - `GET /scrape-amazon-jobs`: run a full scrape and return every job
//! - `GET /health`: liveness probe

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use tower_http::trace::TraceLayer;

use crate::client::JobsClient;
use crate::models::ScrapeResponse;
use crate::scrape;

/// Path of the scrape route.
pub const SCRAPE_PATH: &str = "/scrape-amazon-jobs";

/// Shared state for HTTP handlers.
#[derive(Debug)]
pub struct HttpState {
    pub client: JobsClient,
}

/// Create the HTTP router.
pub fn create_router(client: JobsClient) -> Router {
    let state = Arc::new(HttpState { client });

    Router::new()
        .route("/health", get(health_check))
        .route(SCRAPE_PATH, get(handle_scrape))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "amazon-jobs-scraper",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Each call runs its own full scrape; concurrent calls are not coalesced.
async fn handle_scrape(State(state): State<Arc<HttpState>>) -> Json<ScrapeResponse> {
    tracing::info!("Handling scrape request");

    let jobs = scrape::scrape_jobs(&state.client).await;
    Json(ScrapeResponse::from(jobs))
}
