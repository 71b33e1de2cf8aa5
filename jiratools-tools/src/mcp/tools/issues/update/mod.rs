//! Issue update tool for MCP operations

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::UpdateIssueRequest;

/// Tool for updating an existing issue's fields
#[derive(Default)]
pub struct UpdateIssueTool;

impl UpdateIssueTool {
    /// Creates a new instance of the UpdateIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for UpdateIssueTool {
    fn name(&self) -> &'static str {
        "issue_update"
    }

    fn description(&self) -> &'static str {
        "Update an issue's fields. Each supplied field is written independently; the response lists every change that was applied."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Key of the issue to update, e.g. 'TEST-123'"
                },
                "summary": {
                    "type": "string",
                    "description": "New summary"
                },
                "description": {
                    "type": "string",
                    "description": "New description"
                },
                "status": {
                    "type": "string",
                    "description": "Target status name, matched case-insensitively against the issue's available transitions"
                },
                "priority": {
                    "type": "string",
                    "description": "New priority name"
                },
                "assignee": {
                    "type": "string",
                    "description": "New assignee name"
                },
                "comment": {
                    "type": "string",
                    "description": "Comment to add alongside the update"
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
        let request: UpdateIssueRequest = BaseToolImpl::parse_arguments(arguments)?;
        McpValidation::validate_not_empty(&request.issue_key, "issue key")?;

        tracing::debug!("Updating issue {}", request.issue_key);

        let outcome = jiratools_issues::update_issue(
            context.jira.as_ref(),
            &request.issue_key,
            &jiratools_issues::UpdateIssueRequest {
                summary: request.summary,
                description: request.description,
                status: request.status,
                priority: request.priority,
                assignee: request.assignee,
                comment: request.comment,
            },
        )
        .await
        .map_err(|e| McpErrorHandler::handle_error(e, "update issue"))?;

        tracing::info!("Updated issue {}", outcome.key);
        BaseToolImpl::create_json_response(&outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jiratools_api::mock::{MockJira, MockJiraProvider};
    use jiratools_api::models::{RemoteFields, RemoteIssue, RemoteNamed, RemoteTransition};

    use super::*;
    use crate::mcp::tool_registry::ToolContext;

    fn seeded_api() -> Arc<MockJira> {
        let api = Arc::new(MockJira::new("https://jira.example.com"));
        api.put_issue(RemoteIssue {
            key: "TEST-123".to_string(),
            fields: RemoteFields {
                summary: Some("Test Issue".to_string()),
                status: Some(RemoteNamed {
                    name: "To Do".to_string(),
                }),
                ..Default::default()
            },
        });
        api.set_transitions(vec![
            RemoteTransition {
                id: "2".to_string(),
                name: "In Progress".to_string(),
            },
            RemoteTransition {
                id: "3".to_string(),
                name: "Done".to_string(),
            },
        ]);
        api
    }

    fn response_text(result: &CallToolResult) -> String {
        match &result.content.first().expect("response has content").raw {
            rmcp::model::RawContent::Text(text) => text.text.clone(),
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_reports_change_log() {
        let api = seeded_api();
        let context = ToolContext::new(Arc::new(MockJiraProvider::new(api.clone())));

        let mut args = serde_json::Map::new();
        args.insert("issue_key".to_string(), serde_json::json!("TEST-123"));
        args.insert("summary".to_string(), serde_json::json!("New summary"));
        args.insert("status".to_string(), serde_json::json!("in progress"));

        let result = UpdateIssueTool::new().execute(args, &context).await.unwrap();
        let payload: serde_json::Value = serde_json::from_str(&response_text(&result)).unwrap();
        assert_eq!(payload["key"], "TEST-123");
        assert_eq!(payload["status"], "In Progress");
        assert_eq!(
            payload["changes"],
            serde_json::json!(["Summary updated to: New summary", "Status changed to: In Progress"])
        );
    }

    #[tokio::test]
    async fn unmatched_status_surfaces_available_transitions() {
        let api = seeded_api();
        let context = ToolContext::new(Arc::new(MockJiraProvider::new(api)));

        let mut args = serde_json::Map::new();
        args.insert("issue_key".to_string(), serde_json::json!("TEST-123"));
        args.insert("status".to_string(), serde_json::json!("Closed"));

        let err = UpdateIssueTool::new().execute(args, &context).await.unwrap_err();
        assert!(err.message.contains("Closed"));
        assert!(err.message.contains("Available transitions"));
        assert!(err.message.contains("In Progress"));
        assert!(err.message.contains("Done"));
    }
}
