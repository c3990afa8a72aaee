//! Search pagination tests using wiremock.

mod common;

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use amazon_jobs_scraper::scrape::{fetch_all_pages, scrape_jobs, Paginator, StopReason};

use common::{
    capped_client, mount_search_page, request_count, sample_job, search_body, test_client,
    SEARCH_PATH,
};

// =============================================================================
// Exhaustion
// =============================================================================

#[tokio::test]
async fn test_pages_until_empty_page() {
    let mock_server = MockServer::start().await;

    mount_search_page(
        &mock_server,
        0,
        search_body(vec![sample_job("A1", "SDE I", "http://x/a1"), sample_job("A2", "SDE II", "http://x/a2")]),
    )
    .await;
    mount_search_page(&mock_server, 50, search_body(vec![sample_job("B1", "SDE III", "http://x/b1")]))
        .await;
    mount_search_page(&mock_server, 100, search_body(vec![sample_job("C1", "Intern", "http://x/c1")]))
        .await;
    mount_search_page(&mock_server, 150, search_body(vec![])).await;

    let client = test_client(&mock_server);
    let summaries = fetch_all_pages(&client).await;

    let ids: Vec<_> = summaries.iter().filter_map(|s| s.job_id.as_deref()).collect();
    assert_eq!(ids, vec!["A1", "A2", "B1", "C1"]);
    assert_eq!(request_count(&mock_server, SEARCH_PATH).await, 4);
}

#[tokio::test]
async fn test_sends_fixed_filters_and_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("base_query", "software development engineer"))
        .and(query_param("loc_query", "India"))
        .and(query_param("country", "IND"))
        .and(query_param("result_limit", "50"))
        .and(query_param("offset", "0"))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(vec![])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let summaries = fetch_all_pages(&client).await;

    assert!(summaries.is_empty());
}

#[tokio::test]
async fn test_missing_jobs_key_ends_pagination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"hits": 0})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let mut paginator = Paginator::new(&client);

    assert!(paginator.next_page().await.is_none());
    assert_eq!(paginator.stop_reason(), Some(StopReason::Exhausted));
}

#[tokio::test]
async fn test_duplicates_across_pages_are_kept() {
    let mock_server = MockServer::start().await;

    mount_search_page(&mock_server, 0, search_body(vec![sample_job("A1", "SDE I", "http://x/a1")])).await;
    mount_search_page(&mock_server, 50, search_body(vec![sample_job("A1", "SDE I", "http://x/a1")])).await;
    mount_search_page(&mock_server, 100, search_body(vec![])).await;

    let client = test_client(&mock_server);
    let summaries = fetch_all_pages(&client).await;

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0], summaries[1]);
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn test_first_page_failure_yields_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let jobs = scrape_jobs(&client).await;

    assert!(jobs.is_empty());
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests.iter().all(|r| r.url.path() == SEARCH_PATH));
}

#[tokio::test]
async fn test_failure_midway_keeps_earlier_pages() {
    let mock_server = MockServer::start().await;

    mount_search_page(
        &mock_server,
        0,
        search_body(vec![sample_job("A1", "SDE I", "http://x/a1"), sample_job("A2", "SDE II", "http://x/a2")]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("offset", "50"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let mut paginator = Paginator::new(&client);

    let first = paginator.next_page().await.unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(paginator.offset(), 50);

    assert!(paginator.next_page().await.is_none());
    assert_eq!(paginator.stop_reason(), Some(StopReason::Failed));
    assert_eq!(paginator.pages_fetched(), 1);

    // Stopped paginators stay stopped without further requests.
    assert!(paginator.next_page().await.is_none());
    assert_eq!(request_count(&mock_server, SEARCH_PATH).await, 2);
}

#[tokio::test]
async fn test_invalid_json_ends_pagination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>captcha</html>"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let mut paginator = Paginator::new(&client);

    assert!(paginator.next_page().await.is_none());
    assert_eq!(paginator.stop_reason(), Some(StopReason::Failed));
}

// =============================================================================
// Page cap
// =============================================================================

#[tokio::test]
async fn test_page_cap_limits_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(search_body(vec![sample_job("A1", "SDE I", "http://x/a1")])),
        )
        .mount(&mock_server)
        .await;

    let client = capped_client(&mock_server, 3);
    let mut paginator = Paginator::new(&client);
    let mut pages = 0;
    while paginator.next_page().await.is_some() {
        pages += 1;
    }

    assert_eq!(pages, 3);
    assert_eq!(paginator.stop_reason(), Some(StopReason::PageLimit));
    assert_eq!(request_count(&mock_server, SEARCH_PATH).await, 3);
}

#[tokio::test]
async fn test_zero_page_cap_issues_no_requests() {
    let mock_server = MockServer::start().await;

    let client = capped_client(&mock_server, 0);
    let summaries = fetch_all_pages(&client).await;

    assert!(summaries.is_empty());
    assert_eq!(request_count(&mock_server, SEARCH_PATH).await, 0);
}
