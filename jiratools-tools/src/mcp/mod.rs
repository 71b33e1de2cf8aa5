//! MCP protocol layer
//!
//! Tool registry, shared utilities, request types, tool implementations,
//! and the server handler.

pub mod server;
pub mod shared_utils;
pub mod tool_registry;
pub mod tools;
pub mod types;

pub use server::McpServer;
pub use tool_registry::{
    register_issue_tools, register_project_tools, register_user_tools, BaseToolImpl, McpTool,
    ToolContext, ToolRegistry,
};
