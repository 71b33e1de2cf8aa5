//! User search tool for MCP operations

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::SearchUsersRequest;

/// Tool for searching the user directory
#[derive(Default)]
pub struct SearchUsersTool;

impl SearchUsersTool {
    /// Creates a new instance of the SearchUsersTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for SearchUsersTool {
    fn name(&self) -> &'static str {
        "user_search"
    }

    fn description(&self) -> &'static str {
        "Search for users by name or email. Inactive accounts are excluded unless explicitly requested."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Name or email fragment to search for"
                },
                "include_inactive_users": {
                    "type": "boolean",
                    "description": "Include inactive accounts in the results",
                    "default": false
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: SearchUsersRequest = BaseToolImpl::parse_arguments(arguments)?;

        tracing::debug!("Searching users: {:?}", request.query);

        // Empty-query validation lives in the operation so it also guards
        // non-MCP callers; it fires before any client acquisition.
        let results = jiratools_issues::search_users(
            context.jira.as_ref(),
            &request.query,
            request.include_inactive_users,
        )
        .await
        .map_err(|e| McpErrorHandler::handle_error(e, "search users"))?;

        tracing::info!("Found {} users matching {:?}", results.total, results.query);
        BaseToolImpl::create_json_response(&serde_json::json!({
            "status": "success",
            "message": format!("Found {} users matching \"{}\"", results.total, results.query),
            "details": results,
        }))
    }
}
