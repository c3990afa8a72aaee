//! Job models matching the Amazon jobs search schema.

use serde::{Deserialize, Deserializer, Serialize};

/// One page of the search endpoint's response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    /// Total number of matching jobs, when reported.
    #[serde(default)]
    pub hits: Option<u64>,

    /// Jobs on this page.
    #[serde(default)]
    pub jobs: Vec<SearchHit>,
}

impl SearchPage {
    /// Check whether this page marks the end of the result set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// A raw job entry as returned by the search endpoint.
///
/// The listing may carry either `job_id` or `id`, and either `job_url` or
/// `url`; [`JobSummary`] resolves the fallbacks.
///
/// Every field accepts a string or a number. Any other JSON value (bool,
/// array, object) reads as absent, so one malformed entry never fails the
/// whole page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchHit {
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub job_url: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
}

/// Minimal job metadata from a search page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobSummary {
    /// Job identifier.
    pub job_id: Option<String>,

    /// Job title.
    pub title: Option<String>,

    /// Detail page URL.
    pub url: Option<String>,
}

impl From<SearchHit> for JobSummary {
    fn from(hit: SearchHit) -> Self {
        Self {
            job_id: non_empty_or(hit.job_id, hit.id),
            title: hit.title,
            url: non_empty_or(hit.job_url, hit.url),
        }
    }
}

/// A job summary enriched with its description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Job identifier.
    pub job_id: Option<String>,
    /// Job title.
    pub title: Option<String>,
    /// Description text, empty when it could not be extracted.
    #[serde(default)]
    pub description: String,
    /// Detail page URL.
    pub url: Option<String>,
}

impl JobRecord {
    /// Attach a description to a summary.
    #[must_use]
    pub fn new(summary: JobSummary, description: String) -> Self {
        Self { job_id: summary.job_id, title: summary.title, description, url: summary.url }
    }

    /// Check whether a description was extracted.
    #[must_use]
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

/// Payload returned by the scrape endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrapeResponse {
    /// Number of jobs in `jobs`.
    pub count: usize,

    /// Every scraped job, in search order.
    pub jobs: Vec<JobRecord>,
}

impl From<Vec<JobRecord>> for ScrapeResponse {
    fn from(jobs: Vec<JobRecord>) -> Self {
        Self { count: jobs.len(), jobs }
    }
}

// Primary value unless it is missing or empty.
fn non_empty_or(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    primary.filter(|s| !s.is_empty()).or(fallback)
}

// Strings pass through and numbers are rendered; bools, arrays and objects
// read as absent instead of failing the page.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
