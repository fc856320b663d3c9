//! MCP tool implementations
//!
//! This module contains all MCP tool handlers that expose unidocs
//! functionality to coding agents.

pub mod clear_unity_cache;
pub mod get_server_info;
pub mod get_unity_api_doc;
pub mod handler;
pub mod helpers;
pub mod list_unity_versions;
pub mod registry;
pub mod search_unity_docs;
pub mod show_unidocs_config;
pub mod suggest_unity_classes;

pub use clear_unity_cache::ClearUnityCacheHandler;
pub use get_server_info::GetServerInfoHandler;
pub use get_unity_api_doc::GetUnityApiDocHandler;
pub use handler::{parse_args, text_content, McpToolHandler};
pub use helpers::truncate_text;
pub use list_unity_versions::ListUnityVersionsHandler;
pub use registry::ToolRegistry;
pub use search_unity_docs::SearchUnityDocsHandler;
pub use show_unidocs_config::ShowUnidocsConfigHandler;
pub use suggest_unity_classes::SuggestUnityClassesHandler;
