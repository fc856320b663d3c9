//! Tests for cache CLI commands

use crate::common::create_test_services;
use unidocs::cli::commands::cache::{execute, CacheArgs, CacheCommand};
use unidocs::cli::OutputFormat;

/// Test cache status output
#[tokio::test]
async fn test_cache_status() {
    let (services, _source, _temp) = create_test_services();

    let args = CacheArgs {
        command: CacheCommand::Status,
    };
    assert!(execute(args, &services, OutputFormat::Human).await.is_ok());

    services.search.index("6000.0", false).await.unwrap();
    let args = CacheArgs {
        command: CacheCommand::Status,
    };
    assert!(execute(args, &services, OutputFormat::Json).await.is_ok());
}

/// Test clearing one version
#[tokio::test]
async fn test_cache_clear_version() {
    let (services, source, _temp) = create_test_services();
    services.search.index("6000.0", false).await.unwrap();
    services.search.index("2022.3", false).await.unwrap();

    let args = CacheArgs {
        command: CacheCommand::Clear {
            version: Some("2022.3.1f1".to_string()),
        },
    };
    assert!(execute(args, &services, OutputFormat::Human).await.is_ok());

    let entries = services.search.cache_status().unwrap().entries;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].version, "6000.0");

    services.search.index("2022.3", false).await.unwrap();
    assert_eq!(source.index_fetches(), 3);
}

/// Test clearing every version
#[tokio::test]
async fn test_cache_clear_all() {
    let (services, _source, _temp) = create_test_services();
    services.search.index("6000.0", false).await.unwrap();

    let args = CacheArgs {
        command: CacheCommand::Clear { version: None },
    };
    assert!(execute(args, &services, OutputFormat::Json).await.is_ok());
    assert!(services.search.cache_status().unwrap().entries.is_empty());
}

/// Test clearing an unsupported version
#[tokio::test]
async fn test_cache_clear_unsupported() {
    let (services, _source, _temp) = create_test_services();

    let args = CacheArgs {
        command: CacheCommand::Clear {
            version: Some("3.5".to_string()),
        },
    };
    assert!(execute(args, &services, OutputFormat::Human).await.is_err());
}
