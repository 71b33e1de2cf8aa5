//! Issue details tool for MCP operations

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::IssueDetailsRequest;

/// Tool for fetching full details of a single issue
#[derive(Default)]
pub struct IssueDetailsTool;

impl IssueDetailsTool {
    /// Creates a new instance of the IssueDetailsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for IssueDetailsTool {
    fn name(&self) -> &'static str {
        "issue_details"
    }

    fn description(&self) -> &'static str {
        "Get full details of an issue, including its currently available workflow transitions and, optionally, its comments."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Key of the issue to fetch, e.g. 'TEST-123'"
                },
                "include_comments": {
                    "type": "boolean",
                    "description": "Include the issue's comments in the response",
                    "default": false
                }
            },
            "required": ["issue_key"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: IssueDetailsRequest = BaseToolImpl::parse_arguments(arguments)?;
        McpValidation::validate_not_empty(&request.issue_key, "issue key")?;

        tracing::debug!("Fetching details for issue {}", request.issue_key);

        let detail = jiratools_issues::get_issue_details(
            context.jira.as_ref(),
            &request.issue_key,
            request.include_comments,
        )
        .await
        .map_err(|e| McpErrorHandler::handle_error(e, "get issue details"))?;

        tracing::info!("Retrieved details for issue {}", detail.key);
        BaseToolImpl::create_json_response(&serde_json::json!({
            "status": "success",
            "message": format!("Retrieved details for issue {}", detail.key),
            "details": detail,
        }))
    }
}
