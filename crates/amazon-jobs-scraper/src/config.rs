//! Configuration for the Amazon jobs scraper.

use std::time::Duration;

/// Upstream endpoint and scrape constants.
pub mod api {
    /// Amazon jobs search endpoint (JSON).
    pub const SEARCH_URL: &str = "https://www.amazon.jobs/en/search.json";

    /// User-Agent sent with every outbound request.
    pub const USER_AGENT: &str = "Mozilla/5.0";

    /// Number of results requested per search page.
    pub const RESULT_LIMIT: usize = 50;

    /// CSS selector for the description block on a job detail page.
    pub const DESCRIPTION_SELECTOR: &str = ".job-description";
}

/// The fixed search filters.
pub mod query {
    /// Role keyword.
    pub const BASE_QUERY: &str = "software development engineer";

    /// Location keyword.
    pub const LOC_QUERY: &str = "India";

    /// ISO country code.
    pub const COUNTRY: &str = "IND";
}

/// Search filters sent with every page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Role keyword (`base_query`).
    pub base_query: String,
    /// Location keyword (`loc_query`).
    pub loc_query: String,
    /// ISO country code (`country`).
    pub country: String,
    /// Page size; the offset advances by this much after each page.
    pub result_limit: usize,
}

impl SearchQuery {
    /// Query parameters for the page starting at `offset`.
    #[must_use]
    pub fn params(&self, offset: usize) -> Vec<(&'static str, String)> {
        vec![
            ("base_query", self.base_query.clone()),
            ("loc_query", self.loc_query.clone()),
            ("country", self.country.clone()),
            ("result_limit", self.result_limit.to_string()),
            ("offset", offset.to_string()),
        ]
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            base_query: query::BASE_QUERY.to_string(),
            loc_query: query::LOC_QUERY.to_string(),
            country: query::COUNTRY.to_string(),
            result_limit: api::RESULT_LIMIT,
        }
    }
}

/// Scraper configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Search endpoint URL (overridable for testing with mock servers).
    pub search_url: String,

    /// User-Agent header value.
    pub user_agent: String,

    /// Search filters and page size.
    pub query: SearchQuery,

    /// Stop paginating after this many pages. `None` means run until the
    /// upstream is exhausted or a page fails.
    pub max_pages: Option<usize>,

    /// Per-request timeout. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,

    /// Connection timeout. `None` waits indefinitely.
    pub connect_timeout: Option<Duration>,
}

impl Config {
    /// Create the default configuration: live endpoint, no page cap, no timeouts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            search_url: api::SEARCH_URL.to_string(),
            user_agent: api::USER_AGENT.to_string(),
            query: SearchQuery::default(),
            max_pages: None,
            request_timeout: None,
            connect_timeout: None,
        }
    }

    /// Create a test configuration pointing the search endpoint at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            search_url: format!("{}/en/search.json", base_url),
            request_timeout: Some(Duration::from_secs(5)),
            connect_timeout: Some(Duration::from_secs(2)),
            ..Self::new()
        }
    }

    /// Set the maximum number of search pages to fetch.
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
