//! Client trait and acquisition boundary for the remote Jira instance
//!
//! Operations never hold a client across calls: each one acquires a fresh
//! handle through [`JiraClientProvider`], performs a strictly sequential run
//! of remote calls, and drops it. Construction is cheap, and re-acquiring per
//! call keeps every operation stateless.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use jiratools_common::JiraToolsError;

use crate::models::{
    CreatedIssue, RemoteComment, RemoteIssue, RemoteProject, RemoteTransition, RemoteUser,
};

/// Errors produced by the remote client itself.
///
/// These carry no retry policy; transient failures are the caller's
/// responsibility.
#[derive(Debug, thiserror::Error)]
pub enum JiraApiError {
    /// Non-success HTTP status from the remote system
    #[error("HTTP {status}: {body}")]
    Http {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Transport-level failure (connect, timeout, TLS, decode)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl From<JiraApiError> for JiraToolsError {
    fn from(err: JiraApiError) -> Self {
        JiraToolsError::Remote {
            message: err.to_string(),
        }
    }
}

/// Result alias for remote-client calls.
pub type ApiResult<T> = std::result::Result<T, JiraApiError>;

/// The ten remote capabilities the facade depends on.
///
/// Implementations must be synchronous in effect: every call completes (or
/// fails) before the next one is issued, and no state is cached between
/// calls. `get_issue` distinguishes "no such record" (`Ok(None)`) from
/// transport failure so the facade owns the not-found decision.
#[async_trait]
pub trait JiraApi: Send + Sync {
    /// Base URL of the remote instance, used to construct browse URLs.
    fn server_base(&self) -> &str;

    /// Fetch one issue by key. `Ok(None)` when the remote has no record.
    async fn get_issue(&self, key: &str) -> ApiResult<Option<RemoteIssue>>;

    /// Run a JQL search, restricted to the given fields, single page.
    async fn search(
        &self,
        jql: &str,
        max_results: u32,
        fields: &[String],
    ) -> ApiResult<Vec<RemoteIssue>>;

    /// Create an issue from a prepared `fields` object.
    async fn create_issue(&self, fields: &Value) -> ApiResult<CreatedIssue>;

    /// Apply one independent field mutation to an existing issue.
    async fn update_fields(&self, key: &str, fields: &Value) -> ApiResult<()>;

    /// Add a comment to an issue.
    async fn add_comment(&self, key: &str, body: &str) -> ApiResult<RemoteComment>;

    /// Fetch the live transition set for an issue's current workflow state.
    async fn list_transitions(&self, key: &str) -> ApiResult<Vec<RemoteTransition>>;

    /// Apply a transition by id. When `comment` is given it rides in the same
    /// request payload, keeping transition-plus-comment atomic.
    async fn apply_transition(
        &self,
        key: &str,
        transition_id: &str,
        comment: Option<&str>,
    ) -> ApiResult<()>;

    /// Delete an issue by key.
    async fn delete_issue(&self, key: &str) -> ApiResult<()>;

    /// Search users. Active accounts are always included; inactive ones are
    /// opt-in.
    async fn search_users(
        &self,
        query: &str,
        max_results: u32,
        include_inactive: bool,
    ) -> ApiResult<Vec<RemoteUser>>;

    /// List projects visible to the authenticated user.
    async fn list_projects(&self) -> ApiResult<Vec<RemoteProject>>;
}

/// Per-operation client acquisition.
///
/// The deletion guard and the empty-query check depend on validation
/// happening before `acquire` is ever called, so providers must not contact
/// the remote system until a capability on the returned handle is invoked.
#[async_trait]
pub trait JiraClientProvider: Send + Sync {
    /// Construct a fresh client handle for one operation.
    async fn acquire(&self) -> jiratools_common::Result<Arc<dyn JiraApi>>;
}
