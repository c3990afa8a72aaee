//! Detail page enrichment.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::client::JobsClient;
use crate::config::api;
use crate::error::{EnrichError, EnrichResult};
use crate::models::{JobRecord, JobSummary};

static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(api::DESCRIPTION_SELECTOR).expect("valid description selector")
});

// Elements whose text is code or markup, not readable content.
const NON_CONTENT: &[&str] = &["script", "style", "template"];

/// Extract the description text from a detail page.
///
/// Each text node under the first `.job-description` element is trimmed,
/// blank nodes are dropped and the rest are joined with newlines. Text inside
/// `script`, `style` and `template` elements is skipped. Returns `None` when
/// the page has no such element.
#[must_use]
pub fn extract_description(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let element = document.select(&DESCRIPTION).next()?;
    let root = element.id();

    let text = element
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node
                .ancestors()
                .take_while(|ancestor| ancestor.id() != root)
                .filter_map(|ancestor| ancestor.value().as_element())
                .any(|el| NON_CONTENT.contains(&el.name()));
            (!hidden).then(|| text.trim())
        })
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    Some(text)
}

/// Fetch a detail page and extract its description.
///
/// # Errors
///
/// Returns error if the page cannot be fetched or has no description element.
pub async fn describe(client: &JobsClient, url: &str) -> EnrichResult<String> {
    let html = client.fetch_detail(url).await?;
    extract_description(&html).ok_or_else(|| EnrichError::missing_description(url))
}

/// Description for a job summary, empty when it cannot be extracted.
///
/// Jobs without a URL get an empty description without any request.
pub async fn enrich_description(client: &JobsClient, summary: &JobSummary) -> String {
    let Some(url) = summary.url.as_deref() else {
        return String::new();
    };

    match describe(client, url).await {
        Ok(description) => description,
        Err(e @ EnrichError::MissingDescription { .. }) => {
            tracing::debug!(job_id = ?summary.job_id, error = %e, "No description found");
            String::new()
        }
        Err(e) => {
            tracing::warn!(job_id = ?summary.job_id, url, error = %e, "Failed to enrich job");
            String::new()
        }
    }
}

/// Turn a summary into a record with its description attached.
pub async fn enrich(client: &JobsClient, summary: JobSummary) -> JobRecord {
    let description = enrich_description(client, &summary).await;
    JobRecord::new(summary, description)
}
