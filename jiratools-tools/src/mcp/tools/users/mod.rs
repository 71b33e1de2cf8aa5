//! User tools for MCP operations
//!
//! - **search**: look up users in the remote directory by name or email

pub mod search;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all user-related tools with the registry
pub fn register_user_tools(registry: &mut ToolRegistry) {
    registry.register(search::SearchUsersTool::new());
}
