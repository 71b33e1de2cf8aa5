//! Issue search tool for MCP operations

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::SearchIssuesRequest;

/// Tool for searching issues with a JQL query
#[derive(Default)]
pub struct SearchIssuesTool;

impl SearchIssuesTool {
    /// Creates a new instance of the SearchIssuesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for SearchIssuesTool {
    fn name(&self) -> &'static str {
        "issue_search"
    }

    fn description(&self) -> &'static str {
        "Search for issues using a JQL query. Returns one page of matching issues with the requested fields."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "jql": {
                    "type": "string",
                    "description": "JQL query string, e.g. 'project = TEST AND status = Open'"
                },
                "max_results": {
                    "type": "integer",
                    "description": "Maximum number of results to return",
                    "default": 10
                },
                "fields": {
                    "type": "string",
                    "description": "Comma-separated fields to include per issue; key and summary are always included",
                    "default": "summary,status,assignee,priority,issuetype"
                }
            },
            "required": ["jql"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: SearchIssuesRequest = BaseToolImpl::parse_arguments(arguments)?;
        McpValidation::validate_not_empty(&request.jql, "jql")?;

        tracing::debug!("Searching issues: {}", request.jql);

        let results = jiratools_issues::search_issues(
            context.jira.as_ref(),
            &request.jql,
            request.max_results,
            &request.fields,
        )
        .await
        .map_err(|e| McpErrorHandler::handle_error(e, "search issues"))?;

        BaseToolImpl::create_json_response(&results)
    }
}
