//! Issue transition tool for MCP operations

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::TransitionIssueRequest;

/// Tool for moving an issue to a new workflow status
#[derive(Default)]
pub struct TransitionIssueTool;

impl TransitionIssueTool {
    /// Creates a new instance of the TransitionIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for TransitionIssueTool {
    fn name(&self) -> &'static str {
        "issue_transition"
    }

    fn description(&self) -> &'static str {
        "Transition an issue to a new status. The status name is matched case-insensitively against the issue's currently available transitions; an optional comment is attached atomically with the transition."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Key of the issue to transition, e.g. 'TEST-123'"
                },
                "status": {
                    "type": "string",
                    "description": "Target status name, e.g. 'In Progress'"
                },
                "comment": {
                    "type": "string",
                    "description": "Comment to attach in the same transition request"
                }
            },
            "required": ["issue_key", "status"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: TransitionIssueRequest = BaseToolImpl::parse_arguments(arguments)?;
        McpValidation::validate_not_empty(&request.issue_key, "issue key")?;
        McpValidation::validate_not_empty(&request.status, "status")?;

        tracing::debug!("Transitioning {} to '{}'", request.issue_key, request.status);

        let outcome = jiratools_issues::transition_issue(
            context.jira.as_ref(),
            &request.issue_key,
            &request.status,
            request.comment.as_deref(),
        )
        .await
        .map_err(|e| McpErrorHandler::handle_error(e, "transition issue"))?;

        tracing::info!(
            "Transitioned {} from '{}' to '{}'",
            outcome.issue_key,
            outcome.previous_status,
            outcome.new_status
        );
        BaseToolImpl::create_json_response(&serde_json::json!({
            "status": "success",
            "message": format!(
                "Issue {} transitioned from '{}' to '{}'",
                outcome.issue_key, outcome.previous_status, outcome.new_status
            ),
            "details": outcome,
        }))
    }
}
