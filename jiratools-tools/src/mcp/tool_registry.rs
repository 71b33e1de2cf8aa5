//! Tool registry for MCP operations
//!
//! Registry pattern for managing MCP tools: every tool is a self-contained
//! module implementing [`McpTool`], stored in a [`ToolRegistry`] the server
//! resolves by name. [`ToolContext`] is the dependency-injection seam; it
//! carries the client provider each operation acquires its handle from.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, Tool};
use rmcp::ErrorData as McpError;

use jiratools_api::JiraClientProvider;

/// Context shared by all tools during execution.
///
/// Tools hold no state of their own; everything they need comes in here.
/// The provider hands out a fresh client handle per operation call, so the
/// context itself is cheap to clone and safe to share across tasks.
#[derive(Clone)]
pub struct ToolContext {
    /// Source of remote client handles, acquired per operation call
    pub jira: Arc<dyn JiraClientProvider>,
}

impl ToolContext {
    /// Create a new tool context.
    pub fn new(jira: Arc<dyn JiraClientProvider>) -> Self {
        Self { jira }
    }
}

/// Trait defining the interface for all MCP tools.
///
/// Tool names follow the `{domain}_{action}` pattern (`issue_search`,
/// `project_list`) and must be unique within the registry.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// The tool's unique identifier name.
    fn name(&self) -> &'static str;

    /// Human-readable description shown in tool listings.
    fn description(&self) -> &'static str;

    /// JSON schema for argument validation.
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments and context.
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;
}

/// Registry for managing MCP tools.
///
/// HashMap-based lookup keyed by tool name. The registry itself is built
/// once at startup and only read afterwards.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool in the registry.
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Box::new(tool));
    }

    /// Get a tool by name.
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// List all registered tool names.
    pub fn list_tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Get all registered tools as `Tool` objects for the MCP `list_tools`
    /// response.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .values()
            .map(|tool| {
                let schema_map = match tool.schema() {
                    serde_json::Value::Object(map) => map,
                    _ => serde_json::Map::new(),
                };
                Tool::new(tool.name(), tool.description(), Arc::new(schema_map))
            })
            .collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Base implementation providing common utility methods for MCP tools.
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Parse tool arguments from a JSON map into a typed struct.
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<T, McpError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| McpError::invalid_request(format!("Invalid arguments: {e}"), None))
    }

    /// Create a success response carrying a serialized JSON payload.
    pub fn create_json_response<T: serde::Serialize>(
        payload: &T,
    ) -> std::result::Result<CallToolResult, McpError> {
        let text = serde_json::to_string_pretty(payload)
            .map_err(|e| McpError::internal_error(format!("Failed to serialize response: {e}"), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Create a success response with plain text content.
    pub fn create_success_response<T: Into<String>>(content: T) -> CallToolResult {
        CallToolResult::success(vec![Content::text(content.into())])
    }
}

/// Register all issue-related tools with the registry.
pub fn register_issue_tools(registry: &mut ToolRegistry) {
    super::tools::issues::register_issue_tools(registry);
}

/// Register all project-related tools with the registry.
pub fn register_project_tools(registry: &mut ToolRegistry) {
    super::tools::projects::register_project_tools(registry);
}

/// Register all user-related tools with the registry.
pub fn register_user_tools(registry: &mut ToolRegistry) {
    super::tools::users::register_user_tools(registry);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct TestArgs {
        name: String,
        count: Option<u32>,
    }

    #[test]
    fn parse_arguments_into_typed_struct() {
        let mut args = serde_json::Map::new();
        args.insert("name".to_string(), serde_json::json!("widget"));
        args.insert("count".to_string(), serde_json::json!(3));

        let parsed: TestArgs = BaseToolImpl::parse_arguments(args).unwrap();
        assert_eq!(parsed.name, "widget");
        assert_eq!(parsed.count, Some(3));
    }

    #[test]
    fn parse_arguments_rejects_wrong_types() {
        let mut args = serde_json::Map::new();
        args.insert("name".to_string(), serde_json::json!(42));

        let result: Result<TestArgs, _> = BaseToolImpl::parse_arguments(args);
        assert!(result.is_err());
    }

    #[test]
    fn registry_round_trips_registered_tools() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());

        super::register_issue_tools(&mut registry);
        super::register_project_tools(&mut registry);
        super::register_user_tools(&mut registry);

        assert_eq!(registry.len(), 9);
        assert!(registry.get_tool("issue_search").is_some());
        assert!(registry.get_tool("project_list").is_some());
        assert!(registry.get_tool("user_search").is_some());
        assert!(registry.get_tool("no_such_tool").is_none());

        let tools = registry.list_tools();
        assert_eq!(tools.len(), 9);
        assert!(tools.iter().all(|t| t.description.is_some()));
    }
}
