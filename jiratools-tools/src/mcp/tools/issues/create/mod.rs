//! Issue create tool for MCP operations

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::CreateIssueRequest;

/// Tool for creating a new issue
#[derive(Default)]
pub struct CreateIssueTool;

impl CreateIssueTool {
    /// Creates a new instance of the CreateIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateIssueTool {
    fn name(&self) -> &'static str {
        "issue_create"
    }

    fn description(&self) -> &'static str {
        "Create a new issue in a project. Returns the new issue's key and browse URL."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "project_key": {
                    "type": "string",
                    "description": "Key of the project to create the issue in, e.g. 'TEST'"
                },
                "summary": {
                    "type": "string",
                    "description": "Issue summary"
                },
                "description": {
                    "type": "string",
                    "description": "Issue description"
                },
                "issue_type": {
                    "type": "string",
                    "description": "Issue type name",
                    "default": "Task"
                },
                "priority": {
                    "type": "string",
                    "description": "Priority name, e.g. 'High'"
                },
                "assignee": {
                    "type": "string",
                    "description": "Assignee name"
                }
            },
            "required": ["project_key", "summary"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateIssueRequest = BaseToolImpl::parse_arguments(arguments)?;
        McpValidation::validate_not_empty(&request.project_key, "project key")?;
        McpValidation::validate_not_empty(&request.summary, "summary")?;

        tracing::debug!("Creating issue in project {}", request.project_key);

        let record = jiratools_issues::create_issue(
            context.jira.as_ref(),
            &jiratools_issues::CreateIssueRequest {
                project_key: request.project_key,
                summary: request.summary,
                description: request.description,
                issue_type: request.issue_type,
                priority: request.priority,
                assignee: request.assignee,
            },
        )
        .await
        .map_err(|e| McpErrorHandler::handle_error(e, "create issue"))?;

        tracing::info!("Created issue {}", record.key);
        BaseToolImpl::create_json_response(&record)
    }
}
