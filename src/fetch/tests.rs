use super::*;
use crate::error::Error;
use crate::transport::testing::{trade, ScriptedTransport};
use std::time::{Duration, Instant};
use test_case::test_case;

const BASE_URL: &str = "https://exchange.test/api/BTC/trades/";

fn quick_config(max_attempts: u32) -> FetchConfig {
    FetchConfig::builder()
        .max_attempts(max_attempts)
        .request_timeout(Duration::from_millis(250))
        .retry_delay(Duration::from_millis(15))
        .build()
}

fn transient() -> Error {
    Error::http_status(503, "upstream unavailable")
}

#[test_case(0 => "https://exchange.test/api/BTC/trades/?tid=0"; "start of history")]
#[test_case(1 => "https://exchange.test/api/BTC/trades/?tid=1"; "first trade")]
#[test_case(770_002 => "https://exchange.test/api/BTC/trades/?tid=770002"; "mid history")]
fn page_request_appends_cursor_query(cursor: u64) -> String {
    PageRequest::new(BASE_URL, cursor, 1).url()
}

#[test]
fn default_config_matches_documented_values() {
    let config = FetchConfig::default();

    assert_eq!(config.max_attempts, 4);
    assert_eq!(config.request_timeout, Duration::from_millis(1000));
    assert_eq!(config.retry_delay, Duration::from_millis(1000));
    assert_eq!(config.batch_delay, Duration::from_millis(200));
    assert_eq!(config.max_pages, 0);
}

#[test]
fn builder_overrides_every_field() {
    let config = FetchConfig::builder()
        .max_attempts(7)
        .request_timeout(Duration::from_millis(300))
        .retry_delay(Duration::from_millis(50))
        .batch_delay(Duration::from_millis(10))
        .max_pages(3)
        .build();

    assert_eq!(config.max_attempts, 7);
    assert_eq!(config.request_timeout, Duration::from_millis(300));
    assert_eq!(config.retry_delay, Duration::from_millis(50));
    assert_eq!(config.batch_delay, Duration::from_millis(10));
    assert_eq!(config.max_pages, 3);
}

#[test]
fn validate_rejects_zero_attempts() {
    let config = FetchConfig::builder().max_attempts(0).build();

    let err = config.validate().unwrap_err();
    assert!(
        matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "max_attempts"),
        "unexpected error: {err:?}"
    );
}

#[test]
fn validate_rejects_zero_timeout() {
    let config = FetchConfig::builder()
        .request_timeout(Duration::ZERO)
        .build();

    let err = config.validate().unwrap_err();
    assert!(
        matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "request_timeout"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn first_success_makes_a_single_request() {
    let transport = ScriptedTransport::new([Ok(vec![trade(5705)])]);
    let fetcher = PageFetcher::new(transport.clone(), quick_config(4));

    let batch = fetcher.fetch_page(BASE_URL, 5704).await.unwrap();

    assert_eq!(batch, vec![trade(5705)]);
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn transient_failures_are_retried_until_success() {
    let transport = ScriptedTransport::new([
        Err(transient()),
        Err(transient()),
        Ok(vec![trade(770_003)]),
    ]);
    let fetcher = PageFetcher::new(transport.clone(), quick_config(4));

    let started = Instant::now();
    let batch = fetcher.fetch_page(BASE_URL, 770_002).await.unwrap();

    assert_eq!(batch, vec![trade(770_003)]);
    assert_eq!(transport.call_count(), 3);
    // one constant delay before each of the two retries
    assert!(started.elapsed() >= Duration::from_millis(30));
}

#[tokio::test]
async fn exhausted_budget_reports_cursor_and_attempts() {
    let transport =
        ScriptedTransport::new([Err(transient()), Err(transient()), Err(transient())]);
    let fetcher = PageFetcher::new(transport.clone(), quick_config(3));

    let err = fetcher.fetch_page(BASE_URL, 770_002).await.unwrap_err();

    assert_eq!(transport.call_count(), 3);
    match err {
        Error::RetriesExhausted {
            cursor,
            attempts,
            source,
        } => {
            assert_eq!(cursor, 770_002);
            assert_eq!(attempts, 3);
            assert!(source.is_transient());
        }
        other => panic!("expected RetriesExhausted, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_response_is_never_retried() {
    let transport = ScriptedTransport::new([Err(Error::malformed("not a trade page"))]);
    let fetcher = PageFetcher::new(transport.clone(), quick_config(4));

    let err = fetcher.fetch_page(BASE_URL, 1).await.unwrap_err();

    assert!(matches!(err, Error::Malformed { .. }));
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn client_error_status_is_never_retried() {
    let transport = ScriptedTransport::new([Err(Error::http_status(404, "no such market"))]);
    let fetcher = PageFetcher::new(transport.clone(), quick_config(4));

    let err = fetcher.fetch_page(BASE_URL, 1).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn single_attempt_budget_fails_without_sleeping() {
    let transport = ScriptedTransport::new([Err(transient())]);
    let fetcher = PageFetcher::new(transport.clone(), quick_config(1));

    let started = Instant::now();
    let err = fetcher.fetch_page(BASE_URL, 9).await.unwrap_err();

    assert!(matches!(err, Error::RetriesExhausted { attempts: 1, .. }));
    assert_eq!(transport.call_count(), 1);
    assert!(started.elapsed() < Duration::from_millis(10));
}

#[tokio::test]
async fn every_retry_requests_the_same_url() {
    let transport = ScriptedTransport::new([
        Err(transient()),
        Err(transient()),
        Ok(vec![trade(10)]),
    ]);
    let fetcher = PageFetcher::new(transport.clone(), quick_config(4));

    fetcher.fetch_page(BASE_URL, 9).await.unwrap();

    let urls = transport.requested_urls();
    assert_eq!(urls.len(), 3);
    assert!(urls.iter().all(|url| url == &urls[0]));
    assert_eq!(urls[0], format!("{BASE_URL}?tid=9"));
}

#[tokio::test]
async fn request_timeout_reaches_the_transport() {
    let transport = ScriptedTransport::new([Ok(Vec::new())]);
    let fetcher = PageFetcher::new(transport.clone(), quick_config(4));

    fetcher.fetch_page(BASE_URL, 0).await.unwrap();

    let calls = transport.calls();
    assert_eq!(calls[0].timeout, Duration::from_millis(250));
}
