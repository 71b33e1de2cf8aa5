//! Error types shared across the jira-tools crates
//!
//! Every operation-facing failure in the workspace funnels into
//! [`JiraToolsError`]. Validation failures (`EmptyQuery`,
//! `ConfirmationRequired`) are raised before any remote call is made; remote
//! failures are carried through unmodified in the `Remote` variant.

use thiserror::Error as ThisError;

/// Severity levels for error classification
///
/// - **Warning**: potential issue but the operation can proceed.
/// - **Error**: the operation failed but the process can continue.
/// - **Critical**: the process cannot continue (e.g. missing connection
///   configuration at startup).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Potential issue but operation can proceed
    Warning,
    /// Operation failed but system can continue
    Error,
    /// System cannot continue, requires immediate attention
    Critical,
}

/// Trait for error types that have severity levels
pub trait Severity {
    /// Get the severity level of this error
    fn severity(&self) -> ErrorSeverity;
}

/// Result type alias for jira-tools operations
pub type Result<T> = std::result::Result<T, JiraToolsError>;

/// Error kinds for jira-tools operations
///
/// Validation variants must be produced before the remote client is
/// contacted; `Remote` wraps whatever the transport reported, without
/// retry and without additional semantics.
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum JiraToolsError {
    /// Required connection parameters are absent from the environment
    #[error("Missing required JIRA environment variables: {missing}")]
    MissingConfiguration {
        /// Comma-separated list of the absent variable names
        missing: String,
    },

    /// Remote lookup returned no record for the given issue key
    #[error("Issue {0} not found")]
    IssueNotFound(String),

    /// Requested status has no case-insensitive match among live transitions
    #[error("Cannot transition issue to '{requested}'. Available transitions: {}", available.join(", "))]
    InvalidTransition {
        /// The status name the caller asked for
        requested: String,
        /// Every legal transition name, so the caller can self-correct
        available: Vec<String>,
    },

    /// User search called with an empty query string
    #[error("Search query cannot be empty")]
    EmptyQuery,

    /// Deletion attempted without the explicit confirmation flag
    #[error("Issue deletion requires explicit confirmation. Pass confirm=true to proceed.")]
    ConfirmationRequired,

    /// Transport, auth, or server failure from the remote system
    #[error("JIRA request failed: {message}")]
    Remote {
        /// The underlying failure, verbatim
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Severity for JiraToolsError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            JiraToolsError::MissingConfiguration { .. } => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_transition_enumerates_available_names() {
        let err = JiraToolsError::InvalidTransition {
            requested: "Invalid Status".to_string(),
            available: vec![
                "In Progress".to_string(),
                "Done".to_string(),
                "Blocked".to_string(),
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid Status"));
        assert!(msg.contains("Available transitions"));
        for name in ["In Progress", "Done", "Blocked"] {
            assert!(msg.contains(name), "missing {name} in: {msg}");
        }
    }

    #[test]
    fn not_found_message_matches_contract() {
        let err = JiraToolsError::IssueNotFound("TEST-123".to_string());
        assert_eq!(err.to_string(), "Issue TEST-123 not found");
    }

    #[test]
    fn missing_configuration_is_critical() {
        let err = JiraToolsError::MissingConfiguration {
            missing: "JIRA_SERVER".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(
            JiraToolsError::EmptyQuery.severity(),
            ErrorSeverity::Error
        );
    }

    #[test]
    fn confirmation_required_names_the_flag() {
        let msg = JiraToolsError::ConfirmationRequired.to_string();
        assert!(msg.contains("requires explicit confirmation"));
    }
}
