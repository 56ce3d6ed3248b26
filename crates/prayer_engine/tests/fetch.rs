use std::time::Duration;

use prayer_engine::{FailureKind, FetchSettings, Fetcher, ReqwestFetcher};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn fetcher_returns_parsed_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/calendar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default()).expect("http client");
    let url = format!("{}/calendar", server.uri());

    let payload = fetcher.fetch(&url, TIMEOUT).await.expect("fetch ok");
    assert_eq!(payload, json!({"data": []}));
}

#[tokio::test]
async fn one_fetcher_serves_consecutive_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/calendar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [1]})))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default()).expect("http client");
    let url = format!("{}/calendar", server.uri());
    let missing = format!("{}/missing", server.uri());

    assert_eq!(fetcher.fetch(&url, TIMEOUT).await.unwrap(), json!({"data": [1]}));
    let err = fetcher.fetch(&missing, TIMEOUT).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
    assert_eq!(fetcher.fetch(&url, TIMEOUT).await.unwrap(), json!({"data": [1]}));
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default()).expect("http client");
    let url = format!("{}/broken", server.uri());

    let err = fetcher.fetch(&url, TIMEOUT).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_json(json!({"data": []})),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default()).expect("http client");
    let url = format!("{}/slow", server.uri());

    let err = fetcher
        .fetch(&url, Duration::from_millis(50))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/html"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>oops</html>", "text/html"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default()).expect("http client");
    let url = format!("{}/html", server.uri());

    let err = fetcher.fetch(&url, TIMEOUT).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[1,2,3,4,5,6]"))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings).expect("http client");
    let url = format!("{}/large", server.uri());

    let err = fetcher.fetch(&url, TIMEOUT).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(13)
        }
    );
}

#[tokio::test]
async fn fetcher_reports_connection_failure() {
    let fetcher = ReqwestFetcher::new(FetchSettings::default()).expect("http client");

    // Nothing listens on port 1.
    let err = fetcher
        .fetch("http://127.0.0.1:1/calendar", TIMEOUT)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}

#[tokio::test]
async fn fetcher_rejects_invalid_url() {
    let fetcher = ReqwestFetcher::new(FetchSettings::default()).expect("http client");

    let err = fetcher.fetch("not a url", TIMEOUT).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
