//! Tests for the HTTP documentation source against a mock server

use crate::common::{test_config, SAMPLE_INDEX};
use tempfile::TempDir;
use unidocs::core::config::FetchConfig;
use unidocs::core::error::FetchError;
use unidocs::core::fetch::{DocsSource, HttpDocsSource};
use unidocs::core::services::Services;
use unidocs::core::types::{ArticleRequest, CacheSource, SearchRequest};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INDEX_PATH: &str = "/6000.0/Documentation/ScriptReference/docdata/index.js";

fn source_for(server: &MockServer) -> HttpDocsSource {
    let config = FetchConfig {
        base_url: server.uri(),
        rate_limit_ms: 0,
        ..FetchConfig::default()
    };
    HttpDocsSource::new(&config).unwrap()
}

#[tokio::test]
async fn test_fetch_index_ok() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(INDEX_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_INDEX))
        .expect(1)
        .mount(&server)
        .await;

    let source = source_for(&server);
    let bytes = source.fetch_index("6000.0").await.unwrap();
    assert_eq!(bytes, SAMPLE_INDEX.as_bytes());
}

#[tokio::test]
async fn test_fetch_index_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(INDEX_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = source_for(&server).fetch_index("6000.0").await.unwrap_err();
    assert!(matches!(err, FetchError::NotFound(url) if url.ends_with(INDEX_PATH)));
}

#[tokio::test]
async fn test_fetch_index_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = source_for(&server).fetch_index("6000.0").await.unwrap_err();
    assert_eq!(err, FetchError::Status(500));
}

#[tokio::test]
async fn test_fetch_page_missing_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/6000.0/Documentation/ScriptReference/Nope.html"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let source = source_for(&server);
    let url = format!("{}/6000.0/Documentation/ScriptReference/Nope.html", server.uri());
    assert_eq!(source.fetch_page(&url).await.unwrap(), None);
}

#[tokio::test]
async fn test_search_over_http_fetches_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(INDEX_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_INDEX))
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let mut config = test_config(temp.path());
    config.fetch.base_url = server.uri();
    config.fetch.rate_limit_ms = 0;
    let services = Services::new(config).unwrap();

    let request = SearchRequest {
        query: "vector3".to_string(),
        version: "6000.0".to_string(),
        limit: None,
    };
    let first = services.search.search(request.clone()).await.unwrap();
    let second = services.search.search(request).await.unwrap();

    assert_eq!(first.source, CacheSource::Fresh);
    assert_eq!(second.source, CacheSource::Memory);
    assert!(first.results[0].url.starts_with(&server.uri()));
}

#[tokio::test]
async fn test_article_falls_back_to_hyphen_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/6000.0/Documentation/ScriptReference/Transform.position.html"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/6000.0/Documentation/ScriptReference/Transform-position.html"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(crate::common::fixtures::POSITION_PAGE),
        )
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let mut config = test_config(temp.path());
    config.fetch.base_url = server.uri();
    config.fetch.rate_limit_ms = 0;
    let services = Services::new(config).unwrap();

    let article = services
        .articles
        .fetch(&ArticleRequest {
            class_name: "Transform".to_string(),
            member_name: Some("position".to_string()),
            version: "6000.0".to_string(),
            member_type: None,
        })
        .await
        .unwrap();

    assert_eq!(article.title, "Transform.position");
    assert!(article.url.ends_with("Transform-position.html"));
    assert!(article.content.contains("The world space position of the Transform."));
    assert!(!article.content.contains("Leave feedback"));
}

#[tokio::test]
async fn test_slow_response_is_a_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(INDEX_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(SAMPLE_INDEX)
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = FetchConfig {
        base_url: server.uri(),
        rate_limit_ms: 0,
        timeout_secs: 1,
        ..FetchConfig::default()
    };
    let source = HttpDocsSource::new(&config).unwrap();

    let err = source.fetch_index("6000.0").await.unwrap_err();
    assert_eq!(err, FetchError::Timeout);
}

#[tokio::test]
async fn test_refused_connection_is_a_network_error() {
    let config = FetchConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        rate_limit_ms: 0,
        ..FetchConfig::default()
    };
    let source = HttpDocsSource::new(&config).unwrap();

    let err = source.fetch_index("6000.0").await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
}
