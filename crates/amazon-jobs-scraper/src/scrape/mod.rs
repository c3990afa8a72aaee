//! Scrape pipeline: paginate the search endpoint and enrich every job.
//!
//! Runs as one sequential pass. All jobs of a page are enriched, in order,
//! before the next page is requested. Nothing is cached or deduplicated
//! between pages or between scrapes.

pub mod enricher;
pub mod paginator;

pub use enricher::{describe, enrich, enrich_description, extract_description};
pub use paginator::{fetch_all_pages, Paginator, StopReason};

use std::time::Instant;

use crate::client::JobsClient;
use crate::models::JobRecord;

/// Run a full scrape and return every job record in search order.
pub async fn scrape_jobs(client: &JobsClient) -> Vec<JobRecord> {
    let started = Instant::now();
    let mut paginator = Paginator::new(client);
    let mut jobs = Vec::new();

    while let Some(page) = paginator.next_page().await {
        for summary in page {
            jobs.push(enrich(client, summary).await);
        }
    }

    let described = jobs.iter().filter(|job| job.has_description()).count();
    tracing::info!(
        jobs = jobs.len(),
        described,
        pages = paginator.pages_fetched(),
        stop = ?paginator.stop_reason(),
        elapsed = ?started.elapsed(),
        "Scrape finished"
    );

    jobs
}
