//! Data models for the Amazon jobs search endpoint and the scrape response.
//!
//! Upstream fields use `#[serde(default)]` so that missing keys read as absent
//! rather than failing the whole page.

mod job;

pub use job::{JobRecord, JobSummary, ScrapeResponse, SearchHit, SearchPage};
