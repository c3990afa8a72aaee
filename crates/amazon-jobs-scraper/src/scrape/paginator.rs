//! Search pagination.
//!
//! Walks the search endpoint from offset 0, one page at a time, until a page
//! comes back empty, a request fails, or the configured page cap is hit.
//! Stopping is never an error: whatever was collected is kept.

use crate::client::JobsClient;
use crate::models::JobSummary;

/// Why pagination ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A page returned no jobs.
    Exhausted,
    /// A page request failed (transport, status or body).
    Failed,
    /// The configured maximum page count was reached.
    PageLimit,
}

/// Cursor over the search result pages.
#[derive(Debug)]
pub struct Paginator<'a> {
    client: &'a JobsClient,
    offset: usize,
    pages_fetched: usize,
    stopped: Option<StopReason>,
}

impl<'a> Paginator<'a> {
    /// Start at offset 0.
    #[must_use]
    pub const fn new(client: &'a JobsClient) -> Self {
        Self { client, offset: 0, pages_fetched: 0, stopped: None }
    }

    /// Offset of the next page to request.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Number of non-empty pages returned so far.
    #[must_use]
    pub const fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Why pagination ended, or `None` while pages remain.
    #[must_use]
    pub const fn stop_reason(&self) -> Option<StopReason> {
        self.stopped
    }

    /// Fetch the next page of job summaries.
    ///
    /// Returns `None` once pagination has stopped; every later call returns
    /// `None` without issuing a request.
    pub async fn next_page(&mut self) -> Option<Vec<JobSummary>> {
        if self.stopped.is_some() {
            return None;
        }

        if let Some(max_pages) = self.client.max_pages() {
            if self.pages_fetched >= max_pages {
                tracing::info!(max_pages, "Page limit reached, stopping pagination");
                self.stopped = Some(StopReason::PageLimit);
                return None;
            }
        }

        let page = match self.client.search_page(self.offset).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(offset = self.offset, error = %e, "Search page failed, stopping pagination");
                self.stopped = Some(StopReason::Failed);
                return None;
            }
        };

        if page.is_empty() {
            tracing::debug!(offset = self.offset, "Empty search page, results exhausted");
            self.stopped = Some(StopReason::Exhausted);
            return None;
        }

        tracing::debug!(
            offset = self.offset,
            jobs = page.jobs.len(),
            hits = ?page.hits,
            "Fetched search page"
        );

        self.pages_fetched += 1;
        self.offset += self.client.page_size();

        Some(page.jobs.into_iter().map(JobSummary::from).collect())
    }
}

/// Collect the job summaries of every page, in order.
pub async fn fetch_all_pages(client: &JobsClient) -> Vec<JobSummary> {
    let mut paginator = Paginator::new(client);
    let mut summaries = Vec::new();

    while let Some(page) = paginator.next_page().await {
        summaries.extend(page);
    }

    summaries
}
