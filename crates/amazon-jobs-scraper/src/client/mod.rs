//! Amazon jobs HTTP client.
//!
//! Provides async access to:
//! - The paginated search endpoint (JSON)
//! - Job detail pages (HTML)
//!
//! No retry, cache or rate limiting: each call issues exactly one request.

use reqwest::Client;
use url::Url;

use crate::config::{Config, SearchQuery};
use crate::error::{ClientError, ClientResult};
use crate::models::SearchPage;

/// Amazon jobs API client.
#[derive(Clone)]
pub struct JobsClient {
    /// HTTP client.
    client: Client,

    /// Search endpoint.
    search_url: Url,

    /// Fixed search filters.
    query: SearchQuery,

    /// Page cap for pagination.
    max_pages: Option<usize>,
}

impl JobsClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the search URL is invalid or HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let search_url = Url::parse(&config.search_url)?;

        let mut builder = Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder.gzip(true).build()?;

        Ok(Self { client, search_url, query: config.query, max_pages: config.max_pages })
    }

    /// Search filters sent with every page.
    #[must_use]
    pub const fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Number of results requested per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.query.result_limit
    }

    /// Maximum number of pages to fetch, if capped.
    #[must_use]
    pub const fn max_pages(&self) -> Option<usize> {
        self.max_pages
    }

    /// Fetch one page of search results starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a body that
    /// is not valid JSON.
    pub async fn search_page(&self, offset: usize) -> ClientResult<SearchPage> {
        let params = self.query.params(offset);

        let response = self.client.get(self.search_url.clone()).query(&params).send().await?;

        let response = Self::handle_response(response).await?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(ClientError::from)
    }

    /// Fetch a job detail page as text.
    ///
    /// The body is returned whatever the status code: error pages are parsed
    /// like any other page and simply lack a description.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or if the body cannot be read.
    pub async fn fetch_detail(&self, url: &str) -> ClientResult<String> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "Detail page returned non-success status");
        }

        Ok(response.text().await?)
    }

    /// Handle API response status codes.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        Err(ClientError::unexpected_status(status.as_u16(), text))
    }
}

impl std::fmt::Debug for JobsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobsClient")
            .field("search_url", &self.search_url.as_str())
            .field("max_pages", &self.max_pages)
            .finish_non_exhaustive()
    }
}
