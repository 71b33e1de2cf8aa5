//! # jiratools-common
//!
//! Common error types shared by every jira-tools crate.

#![warn(missing_docs)]

pub mod error;

pub use error::{ErrorSeverity, JiraToolsError, Result, Severity};
