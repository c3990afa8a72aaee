//! Shared helpers for mock-based tests.
#![allow(dead_code)]

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use amazon_jobs_scraper::client::JobsClient;
use amazon_jobs_scraper::config::Config;

/// Search endpoint path on the mock server.
pub const SEARCH_PATH: &str = "/en/search.json";

/// An address nothing listens on, for network faults.
pub const UNREACHABLE: &str = "http://127.0.0.1:1";

/// Create a client pointed at a mock server.
pub fn test_client(mock_server: &MockServer) -> JobsClient {
    JobsClient::new(Config::for_testing(&mock_server.uri())).unwrap()
}

/// Create a client with a page cap.
pub fn capped_client(mock_server: &MockServer, max_pages: usize) -> JobsClient {
    let config = Config::for_testing(&mock_server.uri()).with_max_pages(Some(max_pages));
    JobsClient::new(config).unwrap()
}

/// Sample search listing entry.
pub fn sample_job(id: &str, title: &str, url: &str) -> serde_json::Value {
    json!({
        "job_id": id,
        "title": title,
        "job_url": url,
        "location": "IN, KA, Bengaluru"
    })
}

/// Sample search page body.
pub fn search_body(jobs: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "error": null,
        "hits": 1234,
        "jobs": jobs
    })
}

/// Sample detail page with a description block.
pub fn detail_html(description: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head><title>Job</title></head>
  <body>
    <h1 class="title">Software Development Engineer</h1>
    <div class="section job-description">{description}</div>
  </body>
</html>"#
    )
}

/// Mount a search page at the given offset.
pub async fn mount_search_page(mock_server: &MockServer, offset: usize, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("offset", offset.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

/// Mount a detail page.
pub async fn mount_detail_page(mock_server: &MockServer, page_path: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(mock_server)
        .await;
}

/// Number of requests the mock server received on `request_path`.
pub async fn request_count(mock_server: &MockServer, request_path: &str) -> usize {
    mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == request_path)
        .count()
}
