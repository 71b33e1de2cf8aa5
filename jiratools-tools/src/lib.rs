//! # jiratools-tools
//!
//! MCP tools exposing the jira-tools issue facade over the Model Context
//! Protocol. Each operation is a self-contained tool module registered in a
//! [`mcp::ToolRegistry`]; [`mcp::McpServer`] serves the registry to MCP
//! clients.

pub mod mcp;

pub use mcp::{McpServer, McpTool, ToolContext, ToolRegistry};
