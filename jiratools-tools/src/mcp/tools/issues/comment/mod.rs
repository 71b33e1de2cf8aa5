//! Issue comment tool for MCP operations

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::AddCommentRequest;

/// Tool for adding a comment to an issue
#[derive(Default)]
pub struct AddCommentTool;

impl AddCommentTool {
    /// Creates a new instance of the AddCommentTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AddCommentTool {
    fn name(&self) -> &'static str {
        "issue_comment"
    }

    fn description(&self) -> &'static str {
        "Add a comment to an existing issue. Returns the new comment's id and a URL focused on it."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Key of the issue to comment on, e.g. 'TEST-123'"
                },
                "comment": {
                    "type": "string",
                    "description": "Comment body"
                }
            },
            "required": ["issue_key", "comment"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: AddCommentRequest = BaseToolImpl::parse_arguments(arguments)?;
        McpValidation::validate_not_empty(&request.issue_key, "issue key")?;
        McpValidation::validate_not_empty(&request.comment, "comment")?;

        tracing::debug!("Adding comment to issue {}", request.issue_key);

        let outcome =
            jiratools_issues::add_comment(context.jira.as_ref(), &request.issue_key, &request.comment)
                .await
                .map_err(|e| McpErrorHandler::handle_error(e, "add comment"))?;

        tracing::info!("Added comment {} to {}", outcome.comment_id, outcome.issue_key);
        BaseToolImpl::create_json_response(&serde_json::json!({
            "status": "success",
            "message": format!("Comment added to issue {}", outcome.issue_key),
            "details": outcome,
        }))
    }
}
