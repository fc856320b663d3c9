//! Tests for the two-tier index cache
//!
//! Covers tier promotion, expiration, stale fallback, single-flight
//! refresh and invalidation, all through the search facade.

use crate::common::{create_test_services, services_in, stale_record, MemorySource};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use unidocs::core::cache::DiskStore;
use unidocs::core::error::{DocsError, FetchError};
use unidocs::core::types::{CacheSource, SearchRequest};

fn request(query: &str) -> SearchRequest {
    SearchRequest {
        query: query.to_string(),
        version: "6000.0".to_string(),
        limit: None,
    }
}

#[tokio::test]
async fn test_fresh_index_is_written_to_disk() {
    let (services, _source, temp) = create_test_services();

    services.search.search(request("transform")).await.unwrap();

    let store = DiskStore::new(temp.path().to_path_buf());
    let record = store.load("6000.0").unwrap().expect("record should exist");
    assert_eq!(record.version(), "6000.0");
    assert_eq!(record.page_count(), 6);

    let status = services.search.cache_status().unwrap();
    assert_eq!(status.entries.len(), 1);
    assert!(status.entries[0].in_memory);
    assert!(status.entries[0].on_disk);
    assert!(!status.entries[0].stale);
}

#[tokio::test]
async fn test_disk_tier_survives_new_services() {
    let (services, _source, temp) = create_test_services();
    services.search.search(request("transform")).await.unwrap();

    let second_source = Arc::new(MemorySource::default());
    let restarted = services_in(temp.path(), second_source.clone());
    let response = restarted.search.search(request("vector3")).await.unwrap();

    assert_eq!(response.source, CacheSource::Disk);
    assert_eq!(response.results[0].title, "Vector3");
    assert_eq!(second_source.index_fetches(), 0);

    // Promoted into memory
    let again = restarted.search.search(request("debug")).await.unwrap();
    assert_eq!(again.source, CacheSource::Memory);
}

#[tokio::test]
async fn test_expired_record_is_refreshed() {
    let temp = TempDir::new().unwrap();
    stale_record(temp.path(), "6000.0", 48);

    let source = Arc::new(MemorySource::with_sample(&["6000.0"]));
    let services = services_in(temp.path(), source.clone());

    let first = services.search.search(request("transform")).await.unwrap();
    assert_eq!(first.source, CacheSource::Fresh);
    assert!(!first.stale);

    let second = services.search.search(request("transform")).await.unwrap();
    assert_eq!(second.source, CacheSource::Memory);
    assert_eq!(source.index_fetches(), 1);
}

#[tokio::test]
async fn test_concurrent_refresh_fetches_once() {
    let temp = TempDir::new().unwrap();
    stale_record(temp.path(), "6000.0", 48);

    let source = Arc::new(
        MemorySource::with_sample(&["6000.0"]).with_delay(Duration::from_millis(100)),
    );
    let services = services_in(temp.path(), source.clone());

    let mut handles = Vec::new();
    for _ in 0..8 {
        let services = Arc::clone(&services);
        handles.push(tokio::spawn(async move {
            services.search.search(request("gameobject")).await
        }));
    }

    for handle in handles {
        let response = handle.await.unwrap().unwrap();
        assert_eq!(response.results[0].title, "GameObject");
        assert!(!response.stale);
    }

    assert_eq!(source.index_fetches(), 1);
}

#[tokio::test]
async fn test_stale_record_served_when_refresh_fails() {
    let temp = TempDir::new().unwrap();
    stale_record(temp.path(), "6000.0", 48);

    let source = Arc::new(MemorySource::default());
    source.set_index("6000.0", Err(FetchError::Status(503)));
    let services = services_in(temp.path(), source.clone());

    let response = services.search.search(request("transform")).await.unwrap();

    assert!(response.stale);
    assert_eq!(response.source, CacheSource::Disk);
    assert_eq!(response.results[0].title, "Transform");
}

#[tokio::test]
async fn test_miss_with_failing_source_errors() {
    let (services, source, _temp) = create_test_services();
    source.set_index("6000.0", Err(FetchError::Network("refused".to_string())));

    let err = services.search.search(request("transform")).await.unwrap_err();

    assert!(matches!(
        err,
        DocsError::Fetch {
            source: FetchError::Network(_),
            ..
        }
    ));
}

#[tokio::test]
async fn test_forced_refresh_failure_is_an_error() {
    let (services, source, _temp) = create_test_services();
    services.search.index("6000.0", false).await.unwrap();

    source.set_index("6000.0", Err(FetchError::Timeout));
    let result = services.search.index("6000.0", true).await;
    assert!(result.is_err());

    // The previous index is still cached
    let cached = services.search.index("6000.0", false).await.unwrap();
    assert_eq!(cached.source, CacheSource::Memory);
}

#[tokio::test]
async fn test_malformed_payload_is_never_cached() {
    let (services, source, temp) = create_test_services();
    source.set_index("6000.0", Ok(b"var pages = [[".to_vec()));

    let err = services.search.search(request("transform")).await.unwrap_err();
    assert!(matches!(err, DocsError::Parse { .. }));

    assert!(services.search.cache_status().unwrap().entries.is_empty());
    let store = DiskStore::new(temp.path().to_path_buf());
    assert!(store.load("6000.0").unwrap().is_none());

    // A later good payload is fetched again
    source.set_index("6000.0", Ok(crate::common::SAMPLE_INDEX.as_bytes().to_vec()));
    let response = services.search.search(request("transform")).await.unwrap();
    assert_eq!(response.source, CacheSource::Fresh);
    assert_eq!(source.index_fetches(), 2);
}

#[tokio::test]
async fn test_corrupted_record_is_discarded() {
    let temp = TempDir::new().unwrap();
    let store = DiskStore::new(temp.path().to_path_buf());
    std::fs::write(store.path_for("6000.0"), b"{ not a record").unwrap();

    let source = Arc::new(MemorySource::with_sample(&["6000.0"]));
    let services = services_in(temp.path(), source.clone());

    let response = services.search.search(request("transform")).await.unwrap();
    assert_eq!(response.source, CacheSource::Fresh);
    assert!(store.load("6000.0").unwrap().is_some());
}

#[tokio::test]
async fn test_invalidate_forces_refetch() {
    let (services, source, temp) = create_test_services();
    services.search.search(request("transform")).await.unwrap();

    assert_eq!(services.search.invalidate(Some("6000.0")).unwrap(), 1);
    assert_eq!(services.search.invalidate(Some("6000.0")).unwrap(), 0);
    assert!(DiskStore::new(temp.path().to_path_buf())
        .load("6000.0")
        .unwrap()
        .is_none());

    let response = services.search.search(request("transform")).await.unwrap();
    assert_eq!(response.source, CacheSource::Fresh);
    assert_eq!(source.index_fetches(), 2);
}

#[tokio::test]
async fn test_invalidate_all_versions() {
    let (services, _source, _temp) = create_test_services();
    services.search.index("6000.0", false).await.unwrap();
    services.search.index("2022.3", false).await.unwrap();

    assert_eq!(services.search.cache_status().unwrap().entries.len(), 2);
    assert_eq!(services.search.invalidate(None).unwrap(), 2);
    assert!(services.search.cache_status().unwrap().entries.is_empty());
}
