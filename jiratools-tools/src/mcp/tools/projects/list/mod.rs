//! Project list tool for MCP operations

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ListProjectsRequest;

/// Tool for listing visible projects
#[derive(Default)]
pub struct ListProjectsTool;

impl ListProjectsTool {
    /// Creates a new instance of the ListProjectsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListProjectsTool {
    fn name(&self) -> &'static str {
        "project_list"
    }

    fn description(&self) -> &'static str {
        "List visible projects with their key, name, and lead."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of projects to return",
                    "default": 10
                }
            }
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ListProjectsRequest = BaseToolImpl::parse_arguments(arguments)?;

        tracing::debug!("Listing up to {} projects", request.limit);

        let projects = jiratools_issues::list_projects(context.jira.as_ref(), request.limit)
            .await
            .map_err(|e| McpErrorHandler::handle_error(e, "list projects"))?;

        tracing::info!("Listed {} projects", projects.len());
        BaseToolImpl::create_json_response(&projects)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jiratools_api::mock::{MockJira, MockJiraProvider};
    use jiratools_api::models::{RemoteProject, RemoteUserRef};

    use super::*;
    use crate::mcp::tool_registry::ToolContext;

    fn response_text(result: &CallToolResult) -> String {
        match &result.content.first().expect("response has content").raw {
            rmcp::model::RawContent::Text(text) => text.text.clone(),
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[tokio::test]
    async fn listing_truncates_and_defaults_lead() {
        let api = Arc::new(MockJira::new("https://jira.example.com"));
        api.set_projects(vec![
            RemoteProject {
                key: "TEST".to_string(),
                name: "Test Project".to_string(),
                lead: Some(RemoteUserRef {
                    display_name: Some("Lead Lucy".to_string()),
                }),
            },
            RemoteProject {
                key: "OPS".to_string(),
                name: "Operations".to_string(),
                lead: None,
            },
            RemoteProject {
                key: "DOCS".to_string(),
                name: "Documentation".to_string(),
                lead: None,
            },
        ]);
        let context = ToolContext::new(Arc::new(MockJiraProvider::new(api)));

        let mut args = serde_json::Map::new();
        args.insert("limit".to_string(), serde_json::json!(2));

        let result = ListProjectsTool::new().execute(args, &context).await.unwrap();
        let payload: serde_json::Value = serde_json::from_str(&response_text(&result)).unwrap();
        let projects = payload.as_array().unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0]["key"], "TEST");
        assert_eq!(projects[0]["lead"], "Lead Lucy");
        assert_eq!(projects[1]["lead"], "Unknown");
    }

    #[tokio::test]
    async fn empty_arguments_use_default_limit() {
        let api = Arc::new(MockJira::new("https://jira.example.com"));
        let context = ToolContext::new(Arc::new(MockJiraProvider::new(api)));

        let result = ListProjectsTool::new()
            .execute(serde_json::Map::new(), &context)
            .await
            .unwrap();
        let payload: serde_json::Value = serde_json::from_str(&response_text(&result)).unwrap();
        assert!(payload.as_array().unwrap().is_empty());
    }
}
