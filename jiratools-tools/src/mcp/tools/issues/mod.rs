//! Issue management tools for MCP operations
//!
//! One submodule per tool, each wrapping a single facade operation:
//!
//! - **search**: JQL search returning one page of summaries
//! - **create**: create an issue in a project
//! - **update**: apply independent field mutations with a change log
//! - **delete**: guarded deletion requiring explicit confirmation
//! - **comment**: attach a comment to an issue
//! - **transition**: move an issue to a new workflow status by name
//! - **details**: full issue record including live transitions

pub mod comment;
pub mod create;
pub mod delete;
pub mod details;
pub mod search;
pub mod transition;
pub mod update;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all issue-related tools with the registry
pub fn register_issue_tools(registry: &mut ToolRegistry) {
    registry.register(search::SearchIssuesTool::new());
    registry.register(create::CreateIssueTool::new());
    registry.register(update::UpdateIssueTool::new());
    registry.register(delete::DeleteIssueTool::new());
    registry.register(comment::AddCommentTool::new());
    registry.register(transition::TransitionIssueTool::new());
    registry.register(details::IssueDetailsTool::new());
}
