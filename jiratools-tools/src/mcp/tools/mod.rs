//! MCP tool implementations, grouped by domain
//!
//! Each domain module carries its own `register_*_tools` function; the
//! server calls all of them at startup to populate the registry.

pub mod issues;
pub mod projects;
pub mod users;
