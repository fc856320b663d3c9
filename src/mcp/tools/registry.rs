//! The unidocs tool table

use super::handler::McpToolHandler;
use super::{
    ClearUnityCacheHandler, GetServerInfoHandler, GetUnityApiDocHandler, ListUnityVersionsHandler,
    SearchUnityDocsHandler, ShowUnidocsConfigHandler, SuggestUnityClassesHandler,
};
use crate::core::services::Services;
use crate::mcp::protocol::ToolSchema;
use std::sync::Arc;

/// Documentation tools bound to one set of services, ordered by name
pub struct ToolRegistry {
    tools: Vec<Arc<dyn McpToolHandler>>,
}

impl ToolRegistry {
    /// Build every documentation tool over `services`
    pub fn for_services(services: &Arc<Services>) -> Self {
        let mut tools: Vec<Arc<dyn McpToolHandler>> = vec![
            Arc::new(GetUnityApiDocHandler::new(Arc::clone(services))),
            Arc::new(SearchUnityDocsHandler::new(Arc::clone(services))),
            Arc::new(SuggestUnityClassesHandler::new(Arc::clone(services))),
            Arc::new(ListUnityVersionsHandler::new(Arc::clone(services))),
            Arc::new(ClearUnityCacheHandler::new(Arc::clone(services))),
            Arc::new(GetServerInfoHandler::new()),
            Arc::new(ShowUnidocsConfigHandler::new(Arc::clone(&services.config))),
        ];
        tools.sort_by(|a, b| a.name().cmp(b.name()));

        Self { tools }
    }

    /// Look up a tool by its MCP name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn McpToolHandler>> {
        self.tools
            .binary_search_by(|tool| tool.name().cmp(name))
            .ok()
            .map(|i| &self.tools[i])
    }

    /// Schemas for tools/list
    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.tools.iter().map(|tool| tool.schema()).collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|tool| tool.name())
    }
}
