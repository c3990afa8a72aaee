//! Amazon Jobs Scraper
//!
//! Fetches job postings from the Amazon jobs search endpoint, page by page,
//! and enriches each one with the description scraped from its detail page.
//! The whole pass is exposed through a single HTTP route.
//!
//! # Example
//!
//! ```no_run
//! use amazon_jobs_scraper::{config::Config, scrape, JobsClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::new().with_max_pages(Some(2));
//!     let client = JobsClient::new(config)?;
//!
//!     let jobs = scrape::scrape_jobs(&client).await;
//!     println!("{} jobs", jobs.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod scrape;
pub mod server;

pub use client::JobsClient;
pub use config::Config;
pub use error::{ClientError, EnrichError};
