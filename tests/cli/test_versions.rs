//! Tests for list-versions CLI command

use crate::common::create_test_services;
use unidocs::cli::commands::versions::{execute, list_versions, VersionsArgs};
use unidocs::cli::OutputFormat;

/// Test version listing before anything is cached
#[tokio::test]
async fn test_list_versions_uncached() {
    let (services, _source, _temp) = create_test_services();

    let response = list_versions(&services).unwrap();
    assert_eq!(response.default, "6000.0");
    assert_eq!(response.versions.len(), services.config.versions.supported.len());
    assert!(response.versions.iter().all(|v| !v.cached));
    assert_eq!(response.versions.iter().filter(|v| v.default).count(), 1);
}

/// Test version listing reflects cached indexes
#[tokio::test]
async fn test_list_versions_after_fetch() {
    let (services, _source, _temp) = create_test_services();
    services.search.index("2022.3", false).await.unwrap();

    let response = list_versions(&services).unwrap();
    let cached: Vec<_> = response.versions.iter().filter(|v| v.cached).collect();
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].version, "2022.3");
    assert_eq!(cached[0].pages, Some(6));
    assert!(!cached[0].stale);

    assert!(execute(VersionsArgs {}, &services, OutputFormat::Human)
        .await
        .is_ok());
    assert!(execute(VersionsArgs {}, &services, OutputFormat::Json)
        .await
        .is_ok());
}
