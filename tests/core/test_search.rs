//! Tests for search and suggestions through the facade

use crate::common::create_test_services;
use unidocs::core::error::{DocsError, FetchError};
use unidocs::core::index::MemberType;
use unidocs::core::search::engine::{EXACT_SCORE, PREFIX_SCORE};
use unidocs::core::types::{CacheSource, SearchRequest, SuggestRequest};

fn search_request(query: &str, version: &str) -> SearchRequest {
    SearchRequest {
        query: query.to_string(),
        version: version.to_string(),
        limit: None,
    }
}

fn suggest_request(partial: &str, version: &str) -> SuggestRequest {
    SuggestRequest {
        partial: partial.to_string(),
        version: version.to_string(),
        limit: None,
    }
}

#[tokio::test]
async fn test_exact_match_outranks_prefix_match() {
    let (services, _source, _temp) = create_test_services();

    let response = services
        .search
        .search(search_request("gameobject", "6000.0"))
        .await
        .unwrap();

    assert_eq!(response.count, 2);
    assert_eq!(response.results[0].title, "GameObject");
    assert_eq!(response.results[0].score, EXACT_SCORE);
    assert_eq!(response.results[0].member_type, MemberType::Class);
    assert_eq!(response.results[1].title, "GameObject.SetActive");
    assert_eq!(response.results[1].score, PREFIX_SCORE);
    assert_eq!(
        response.results[0].url,
        "https://docs.example.test/6000.0/Documentation/ScriptReference/GameObject.html"
    );
}

#[tokio::test]
async fn test_split_words_match_compound_title() {
    let (services, _source, _temp) = create_test_services();

    let response = services
        .search
        .search(search_request("Game Object", "6000.0"))
        .await
        .unwrap();

    // game (prefix) + object (substring) + gameobject (exact)
    assert_eq!(response.results[0].title, "GameObject");
    assert_eq!(response.results[0].score, 9.0);
    assert_eq!(response.results[1].score, 7.0);
}

#[tokio::test]
async fn test_stop_words_are_ignored() {
    let (services, _source, _temp) = create_test_services();

    let response = services
        .search
        .search(search_request("the transform", "6000.0"))
        .await
        .unwrap();

    assert_eq!(response.results[0].title, "Transform");
    assert_eq!(response.results[0].score, EXACT_SCORE);
    assert_eq!(response.results[1].title, "Transform-position");

    let only_stop_words = services
        .search
        .search(search_request("the of a", "6000.0"))
        .await
        .unwrap();
    assert_eq!(only_stop_words.count, 0);
}

#[tokio::test]
async fn test_limit_is_capped() {
    let (services, _source, _temp) = create_test_services();

    let mut request = search_request("o", "6000.0");
    request.limit = Some(2);
    let response = services.search.search(request).await.unwrap();
    assert_eq!(response.results.len(), 2);

    let mut request = search_request("o", "6000.0");
    request.limit = Some(10_000);
    let response = services.search.search(request).await.unwrap();
    assert!(response.results.len() <= services.config.search.max_results);
}

#[tokio::test]
async fn test_overlong_query_is_rejected() {
    let (services, source, _temp) = create_test_services();

    let query = "x".repeat(services.config.search.max_query_length + 1);
    let err = services
        .search
        .search(search_request(&query, "6000.0"))
        .await
        .unwrap_err();

    assert!(matches!(err, DocsError::InvalidQuery(_)));
    assert_eq!(source.index_fetches(), 0);
}

#[tokio::test]
async fn test_unsupported_version_never_fetches() {
    let (services, source, _temp) = create_test_services();

    let err = services
        .search
        .search(search_request("transform", "4.7"))
        .await
        .unwrap_err();

    assert!(matches!(err, DocsError::UnsupportedVersion { .. }));
    assert_eq!(source.index_fetches(), 0);
}

#[tokio::test]
async fn test_second_search_uses_memory() {
    let (services, source, _temp) = create_test_services();

    let first = services
        .search
        .search(search_request("vector3", "2022.3"))
        .await
        .unwrap();
    let second = services
        .search
        .search(search_request("debug", "2022.3"))
        .await
        .unwrap();

    assert_eq!(first.source, CacheSource::Fresh);
    assert_eq!(second.source, CacheSource::Memory);
    assert_eq!(source.index_fetches(), 1);
}

#[tokio::test]
async fn test_suggest_prefix_in_page_order() {
    let (services, _source, _temp) = create_test_services();

    let response = services
        .search
        .suggest(suggest_request("trans", "6000.0"))
        .await
        .unwrap();

    assert!(!response.fallback);
    assert_eq!(
        response.suggestions,
        vec!["Transform".to_string(), "Transform-position".to_string()]
    );
}

#[tokio::test]
async fn test_suggest_falls_back_when_index_unavailable() {
    let (services, source, _temp) = create_test_services();
    source.set_index("6000.0", Err(FetchError::Timeout));

    let response = services
        .search
        .suggest(suggest_request("vec", "6000.0"))
        .await
        .unwrap();

    assert!(response.fallback);
    assert_eq!(
        response.suggestions,
        vec!["Vector2".to_string(), "Vector3".to_string()]
    );
}
