//! Shared utilities for MCP tool implementations
//!
//! Error conversion and request validation used by every tool module, so the
//! mapping from domain errors to MCP protocol errors stays in one place.

use rmcp::ErrorData as McpError;

use jiratools_common::JiraToolsError;

/// Converts domain errors to MCP protocol errors.
pub struct McpErrorHandler;

impl McpErrorHandler {
    /// Convert a [`JiraToolsError`] to the appropriate MCP error.
    ///
    /// Caller mistakes (bad key, unmatched transition, missing confirmation,
    /// empty query) become `invalid_params` so clients can self-correct;
    /// everything else is an internal error tagged with the operation that
    /// failed.
    pub fn handle_error(error: JiraToolsError, operation: &str) -> McpError {
        tracing::warn!("{operation} failed: {error}");
        match &error {
            JiraToolsError::IssueNotFound(_)
            | JiraToolsError::InvalidTransition { .. }
            | JiraToolsError::EmptyQuery
            | JiraToolsError::ConfirmationRequired => {
                McpError::invalid_params(error.to_string(), None)
            }
            JiraToolsError::MissingConfiguration { .. } => {
                McpError::invalid_request(error.to_string(), None)
            }
            _ => McpError::internal_error(format!("Failed to {operation}: {error}"), None),
        }
    }
}

/// Request validation helpers shared across tools.
pub struct McpValidation;

impl McpValidation {
    /// Reject empty or whitespace-only required string arguments.
    pub fn validate_not_empty(value: &str, field: &str) -> std::result::Result<(), McpError> {
        if value.trim().is_empty() {
            return Err(McpError::invalid_params(
                format!("{field} cannot be empty"),
                None,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_mistakes_map_to_invalid_params() {
        let err = McpErrorHandler::handle_error(
            JiraToolsError::IssueNotFound("TEST-1".to_string()),
            "get issue details",
        );
        assert!(err.message.contains("TEST-1 not found"));

        let err = McpErrorHandler::handle_error(JiraToolsError::ConfirmationRequired, "delete issue");
        assert!(err.message.contains("requires explicit confirmation"));
    }

    #[test]
    fn remote_failures_map_to_internal_errors() {
        let err = McpErrorHandler::handle_error(
            JiraToolsError::Remote {
                message: "503 from upstream".to_string(),
            },
            "search issues",
        );
        assert!(err.message.contains("Failed to search issues"));
        assert!(err.message.contains("503 from upstream"));
    }

    #[test]
    fn empty_and_blank_strings_fail_validation() {
        assert!(McpValidation::validate_not_empty("", "issue key").is_err());
        assert!(McpValidation::validate_not_empty("   ", "issue key").is_err());
        assert!(McpValidation::validate_not_empty("TEST-1", "issue key").is_ok());
    }
}
