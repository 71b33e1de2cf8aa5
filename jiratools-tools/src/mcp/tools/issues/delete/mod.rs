//! Issue delete tool for MCP operations
//!
//! Deletion is guarded: without `confirm: true` the tool fails before any
//! remote client is constructed or contacted.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::DeleteIssueRequest;

/// Tool for permanently deleting an issue
#[derive(Default)]
pub struct DeleteIssueTool;

impl DeleteIssueTool {
    /// Creates a new instance of the DeleteIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for DeleteIssueTool {
    fn name(&self) -> &'static str {
        "issue_delete"
    }

    fn description(&self) -> &'static str {
        "Permanently delete an issue. Requires confirm=true; without it the request is rejected before any remote call."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Key of the issue to delete, e.g. 'TEST-123'"
                },
                "confirm": {
                    "type": "boolean",
                    "description": "Must be true to actually delete the issue",
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
        let request: DeleteIssueRequest = BaseToolImpl::parse_arguments(arguments)?;
        McpValidation::validate_not_empty(&request.issue_key, "issue key")?;

        tracing::debug!(
            "Deleting issue {} (confirm={})",
            request.issue_key,
            request.confirm
        );

        let outcome =
            jiratools_issues::delete_issue(context.jira.as_ref(), &request.issue_key, request.confirm)
                .await
                .map_err(|e| McpErrorHandler::handle_error(e, "delete issue"))?;

        tracing::info!("Deleted issue {}", outcome.key);
        BaseToolImpl::create_json_response(&serde_json::json!({
            "status": "success",
            "message": format!("Issue {} successfully deleted", outcome.key),
            "details": outcome,
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jiratools_api::mock::{MockJira, MockJiraProvider};
    use jiratools_api::models::{RemoteFields, RemoteIssue};

    use super::*;
    use crate::mcp::tool_registry::ToolContext;

    fn seeded_api() -> Arc<MockJira> {
        let api = Arc::new(MockJira::new("https://jira.example.com"));
        api.put_issue(RemoteIssue {
            key: "TEST-123".to_string(),
            fields: RemoteFields {
                summary: Some("Doomed issue".to_string()),
                ..Default::default()
            },
        });
        api
    }

    fn response_text(result: &CallToolResult) -> String {
        match &result.content.first().expect("response has content").raw {
            rmcp::model::RawContent::Text(text) => text.text.clone(),
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unconfirmed_delete_makes_zero_remote_calls() {
        let api = seeded_api();
        let provider = Arc::new(MockJiraProvider::new(api.clone()));
        let context = ToolContext::new(provider.clone());

        let mut args = serde_json::Map::new();
        args.insert("issue_key".to_string(), serde_json::json!("TEST-123"));

        let err = DeleteIssueTool::new().execute(args, &context).await.unwrap_err();
        assert!(err.message.contains("requires explicit confirmation"));
        assert_eq!(provider.acquisitions(), 0);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn confirmed_delete_reports_success_envelope() {
        let api = seeded_api();
        let context = ToolContext::new(Arc::new(MockJiraProvider::new(api.clone())));

        let mut args = serde_json::Map::new();
        args.insert("issue_key".to_string(), serde_json::json!("TEST-123"));
        args.insert("confirm".to_string(), serde_json::json!(true));

        let result = DeleteIssueTool::new().execute(args, &context).await.unwrap();
        let payload: serde_json::Value = serde_json::from_str(&response_text(&result)).unwrap();
        assert_eq!(payload["status"], "success");
        assert_eq!(payload["message"], "Issue TEST-123 successfully deleted");
        assert_eq!(payload["details"]["key"], "TEST-123");
        assert_eq!(payload["details"]["summary"], "Doomed issue");
        assert_eq!(payload["details"]["project"], "TEST");
        assert_eq!(api.call_count("delete_issue"), 1);
    }
}
