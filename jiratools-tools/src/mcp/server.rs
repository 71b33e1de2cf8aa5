//! MCP server exposing the jira-tools operations
//!
//! Thin [`ServerHandler`] over the tool registry: `list_tools` enumerates
//! the registry, `call_tool` resolves by name and executes with the shared
//! [`ToolContext`]. Transport is the caller's concern; the CLI serves this
//! handler over stdio.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam,
    ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::ErrorData as McpError;
use rmcp::{RoleServer, ServerHandler};

use jiratools_api::JiraClientProvider;

use super::tool_registry::{
    register_issue_tools, register_project_tools, register_user_tools, ToolContext, ToolRegistry,
};

const SERVER_INSTRUCTIONS: &str = "Issue tracker tools: search, create, update, transition, \
delete, and comment on issues, plus project and user lookup. Deletion requires confirm=true.";

/// MCP server handler carrying the tool registry and execution context.
#[derive(Clone)]
pub struct McpServer {
    registry: Arc<ToolRegistry>,
    context: ToolContext,
}

impl McpServer {
    /// Build a server with every tool registered.
    pub fn new(jira: Arc<dyn JiraClientProvider>) -> Self {
        let mut registry = ToolRegistry::new();
        register_issue_tools(&mut registry);
        register_project_tools(&mut registry);
        register_user_tools(&mut registry);
        tracing::info!("Registered {} MCP tools", registry.len());

        Self {
            registry: Arc::new(registry),
            context: ToolContext::new(jira),
        }
    }

    /// Names of every registered tool, for diagnostics.
    pub fn tool_names(&self) -> Vec<String> {
        self.registry.list_tool_names()
    }
}

impl ServerHandler for McpServer {
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.registry.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        tracing::debug!("call_tool: {}", request.name);

        let tool = self.registry.get_tool(&request.name).ok_or_else(|| {
            tracing::warn!("Unknown tool requested: {}", request.name);
            McpError::invalid_request(format!("Unknown tool: {}", request.name), None)
        })?;

        let arguments = request.arguments.unwrap_or_default();
        tool.execute(arguments, &self.context).await
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::default())
            .with_server_info(Implementation::from_build_env())
            .with_instructions(SERVER_INSTRUCTIONS)
    }
}

#[cfg(test)]
mod tests {
    use jiratools_api::mock::{MockJira, MockJiraProvider};

    use super::*;

    fn test_server() -> McpServer {
        let api = Arc::new(MockJira::new("https://jira.example.com"));
        McpServer::new(Arc::new(MockJiraProvider::new(api)))
    }

    #[test]
    fn server_registers_all_nine_tools() {
        let server = test_server();
        let mut names = server.tool_names();
        names.sort();
        assert_eq!(
            names,
            vec![
                "issue_comment",
                "issue_create",
                "issue_delete",
                "issue_details",
                "issue_search",
                "issue_transition",
                "issue_update",
                "project_list",
                "user_search",
            ]
        );
    }

    #[test]
    fn server_info_advertises_tool_capability() {
        let info = test_server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.is_some());
    }
}
