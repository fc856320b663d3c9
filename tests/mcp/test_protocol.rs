//! MCP protocol flow tests

use crate::common::create_test_services;
use serde_json::{json, Value};
use unidocs::mcp::protocol::{INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR};
use unidocs::mcp::server::McpServer;

fn create_test_server() -> (McpServer, tempfile::TempDir) {
    let (services, _source, temp) = create_test_services();
    (McpServer::new(services), temp)
}

async fn send(server: &McpServer, message: Value) -> Value {
    let response = server.process_message(&message.to_string()).await.unwrap();
    serde_json::to_value(response).unwrap()
}

#[tokio::test]
async fn test_initialize_handshake() {
    let (server, _temp) = create_test_server();

    let response = send(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {"tools": {}},
                "clientInfo": {"name": "test", "version": "1.0"}
            }
        }),
    )
    .await;

    assert_eq!(response["id"], json!(1));
    assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(response["result"]["serverInfo"]["name"], "unidocs-mcp");
    assert!(response["result"]["capabilities"]["tools"].is_object());

    let ack = server
        .process_message(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
        .await
        .unwrap();
    assert!(ack.is_notification_ack());
}

#[tokio::test]
async fn test_tools_list_names_all_tools() {
    let (server, _temp) = create_test_server();

    let response = send(
        &server,
        json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
    )
    .await;

    let names: Vec<&str> = response["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();

    assert_eq!(
        names,
        vec![
            "clear_unity_cache",
            "get_server_info",
            "get_unity_api_doc",
            "list_unity_versions",
            "search_unity_docs",
            "show_unidocs_config",
            "suggest_unity_classes",
        ]
    );

    for tool in response["result"]["tools"].as_array().unwrap() {
        assert_eq!(tool["inputSchema"]["type"], "object");
        assert!(!tool["description"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_ping() {
    let (server, _temp) = create_test_server();
    let response = send(&server, json!({"jsonrpc": "2.0", "id": "p", "method": "ping"})).await;
    assert_eq!(response, json!({"jsonrpc": "2.0", "id": "p", "result": {}}));
}

#[tokio::test]
async fn test_protocol_errors() {
    let (server, _temp) = create_test_server();

    let err = server.process_message("not json").await.unwrap_err();
    assert_eq!(err.code_and_message().0, PARSE_ERROR);

    let response = send(&server, json!({"jsonrpc": "1.0", "id": 1, "method": "ping"})).await;
    assert_eq!(response["error"]["code"], json!(INVALID_REQUEST));

    let response = send(&server, json!({"jsonrpc": "2.0", "id": 2, "method": "prompts/list"})).await;
    assert_eq!(response["error"]["code"], json!(METHOD_NOT_FOUND));

    let response = send(&server, json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call"})).await;
    assert_eq!(response["error"]["code"], json!(INVALID_PARAMS));

    let response = send(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 4,
            "method": "tools/call",
            "params": {"name": "no_such_tool", "arguments": {}}
        }),
    )
    .await;
    assert_eq!(response["error"]["code"], json!(METHOD_NOT_FOUND));
}

#[tokio::test]
async fn test_serve_over_stream() {
    let (server, _temp) = create_test_server();

    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"search_unity_docs","arguments":{"query":"vector3"}}}"#,
        "\n",
    );
    let mut output: Vec<u8> = Vec::new();
    server.serve(input.as_bytes(), &mut output).await.unwrap();

    let responses: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[1]["id"], json!(2));
    let text = responses[1]["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("Vector3"));
}
