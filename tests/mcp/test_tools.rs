//! MCP tool tests through tools/call

use crate::common::fixtures::{BASE_URL, POSITION_PAGE};
use crate::common::{create_test_services, MemorySource};
use serde_json::{json, Value};
use std::sync::Arc;
use unidocs::core::error::FetchError;
use unidocs::mcp::protocol::{
    ARTICLE_NOT_FOUND, INDEX_UNAVAILABLE, INVALID_PARAMS, UNSUPPORTED_VERSION,
};
use unidocs::mcp::server::McpServer;

struct Harness {
    server: McpServer,
    source: Arc<MemorySource>,
    _temp: tempfile::TempDir,
}

fn harness() -> Harness {
    let (services, source, temp) = create_test_services();
    Harness {
        server: McpServer::new(services),
        source,
        _temp: temp,
    }
}

async fn call(server: &McpServer, name: &str, arguments: Value) -> Value {
    let message = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools/call",
        "params": {"name": name, "arguments": arguments}
    });
    let response = server.process_message(&message.to_string()).await.unwrap();
    serde_json::to_value(response).unwrap()
}

fn text(response: &Value) -> &str {
    response["result"]["content"][0]["text"]
        .as_str()
        .unwrap_or_else(|| panic!("expected text content, got {response}"))
}

fn error_code(response: &Value) -> i64 {
    response["error"]["code"]
        .as_i64()
        .unwrap_or_else(|| panic!("expected error, got {response}"))
}

#[tokio::test]
async fn test_search_ranks_exact_title_first() {
    let h = harness();

    let response = call(&h.server, "search_unity_docs", json!({"query": "gameobject"})).await;
    let output = text(&response);

    let exact = output.find("GameObject").unwrap();
    let prefix = output.find("GameObject.SetActive").unwrap();
    assert!(exact < prefix);
    assert!(output.contains("6000.0"));
}

#[tokio::test]
async fn test_search_normalizes_release_version() {
    let h = harness();

    let response = call(
        &h.server,
        "search_unity_docs",
        json!({"query": "transform", "version": "2022.3.15f1"}),
    )
    .await;

    let output = text(&response);
    assert!(output.contains("2022.3"));
    assert!(output.contains("normalized from 2022.3.15f1"));
}

#[tokio::test]
async fn test_search_error_codes() {
    let h = harness();

    let response = call(
        &h.server,
        "search_unity_docs",
        json!({"query": "transform", "version": "5.6"}),
    )
    .await;
    assert_eq!(error_code(&response), UNSUPPORTED_VERSION as i64);

    let response = call(&h.server, "search_unity_docs", json!({"version": "6000.0"})).await;
    assert_eq!(error_code(&response), INVALID_PARAMS as i64);

    h.source.set_index("6000.0", Err(FetchError::Timeout));
    let response = call(&h.server, "search_unity_docs", json!({"query": "transform"})).await;
    assert_eq!(error_code(&response), INDEX_UNAVAILABLE as i64);
}

#[tokio::test]
async fn test_suggest_classes() {
    let h = harness();

    let response = call(
        &h.server,
        "suggest_unity_classes",
        json!({"partial_name": "Vec"}),
    )
    .await;
    assert!(text(&response).contains("- Vector3"));
}

#[tokio::test]
async fn test_get_api_doc() {
    let h = harness();
    h.source.add_page(
        &format!("{BASE_URL}/6000.0/Documentation/ScriptReference/Transform-position.html"),
        POSITION_PAGE,
    );

    let response = call(
        &h.server,
        "get_unity_api_doc",
        json!({"class_name": "Transform", "member_name": "position", "member_type": "property"}),
    )
    .await;

    let output = text(&response);
    assert!(output.starts_with("# Transform.position"));
    assert!(output.contains("Transform-position.html"));
    assert!(output.contains("The world space position of the Transform."));
    assert_eq!(h.source.page_fetches(), 1);
}

#[tokio::test]
async fn test_get_api_doc_not_found() {
    let h = harness();

    let response = call(
        &h.server,
        "get_unity_api_doc",
        json!({"class_name": "Transform", "member_name": "nothing"}),
    )
    .await;

    assert_eq!(error_code(&response), ARTICLE_NOT_FOUND as i64);
    // Dot form, then hyphen form
    assert_eq!(h.source.page_fetches(), 2);
}

#[tokio::test]
async fn test_list_versions_and_clear_cache() {
    let h = harness();
    call(&h.server, "search_unity_docs", json!({"query": "debug"})).await;

    let response = call(&h.server, "list_unity_versions", json!({})).await;
    let output = text(&response);
    assert!(output.contains("| 6000.0 |"));
    assert!(output.contains("6 pages"));

    let response = call(&h.server, "clear_unity_cache", json!({"version": "6000.0"})).await;
    assert!(text(&response).contains("Cleared cached index for version 6000.0."));

    call(&h.server, "search_unity_docs", json!({"query": "debug"})).await;
    assert_eq!(h.source.index_fetches(), 2);
}

#[tokio::test]
async fn test_info_and_config_tools() {
    let h = harness();

    let response = call(&h.server, "get_server_info", json!({})).await;
    assert!(text(&response).contains("unidocs-mcp"));

    let response = call(&h.server, "show_unidocs_config", json!({"detailed": true})).await;
    assert!(text(&response).contains("6000.0"));
}
