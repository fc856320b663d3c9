//! Tests for get-api-doc CLI command

use crate::common::create_test_services;
use crate::common::fixtures::{BASE_URL, POSITION_PAGE};
use unidocs::cli::commands::api_doc::{execute, ApiDocArgs};
use unidocs::cli::OutputFormat;

fn args(member_type: Option<&str>) -> ApiDocArgs {
    ApiDocArgs {
        class_name: "Transform".to_string(),
        member_name: Some("position".to_string()),
        member_type: member_type.map(str::to_string),
        version: None,
    }
}

/// Test fetching an existing member page
#[tokio::test]
async fn test_api_doc_found() {
    let (services, source, _temp) = create_test_services();
    source.add_page(
        &format!("{BASE_URL}/6000.0/Documentation/ScriptReference/Transform-position.html"),
        POSITION_PAGE,
    );

    let result = execute(args(Some("property")), &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Article should be found: {:?}", result.err());

    let result = execute(args(None), &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

/// Test a page that exists under neither URL form
#[tokio::test]
async fn test_api_doc_not_found() {
    let (services, source, _temp) = create_test_services();

    let result = execute(args(None), &services, OutputFormat::Human).await;
    assert!(result.is_err());
    assert_eq!(source.page_fetches(), 2);
}

/// Test an unknown member type hint
#[tokio::test]
async fn test_api_doc_bad_member_type() {
    let (services, source, _temp) = create_test_services();

    let result = execute(args(Some("event")), &services, OutputFormat::Human).await;
    assert!(result.is_err());
    assert_eq!(source.page_fetches(), 0);
}
