//! Normalized response records
//!
//! Every record here is flat and optional-safe: fields that can be missing
//! upstream are substituted with documented defaults at normalization time,
//! so consumers never branch on key absence. The two exceptions are
//! [`IssueSummary`]'s optional subset (governed by the caller's field
//! request) and [`IssueDetail::comments`] (present only when requested).

use serde::Serialize;

/// One search hit. `key` and `summary` are always present; the rest appear
/// only if requested by the caller and available upstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueSummary {
    pub key: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuetype: Option<String>,
}

/// A search result page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    /// Always equals `issues.len()` — one page, no server-side total
    pub total: usize,
    pub issues: Vec<IssueSummary>,
}

/// The project an issue belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectInfo {
    pub key: String,
    pub name: String,
}

/// Fully normalized issue, superset of [`IssueSummary`].
///
/// `available_transitions` is recomputed at read time from the issue's
/// current workflow state; it is never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueDetail {
    pub key: String,
    pub summary: String,
    pub description: String,
    pub status: String,
    pub issue_type: String,
    pub project: ProjectInfo,
    pub created: String,
    pub updated: String,
    pub creator: String,
    pub reporter: String,
    pub assignee: String,
    pub priority: String,
    pub labels: Vec<String>,
    pub available_transitions: Vec<String>,
    pub url: String,
    /// Present only when comments were requested; absent otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<CommentRecord>>,
}

/// A normalized issue comment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentRecord {
    pub id: String,
    pub body: String,
    pub author: String,
    pub created: String,
    /// Falls back to `created` when the remote has no separate update time
    pub updated: String,
}

/// A normalized project listing entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRecord {
    pub key: String,
    pub name: String,
    pub lead: String,
}

/// A normalized user directory entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRecord {
    pub account_id: String,
    pub display_name: String,
    pub email: String,
    pub active: bool,
    pub time_zone: String,
    pub locale: String,
    pub avatar_url: String,
}

/// Result of `create_issue`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedIssueRecord {
    pub key: String,
    pub summary: String,
    pub project: String,
    pub url: String,
}

/// Result of `update_issue`. `summary` and `status` reflect the re-fetched
/// final state; `changes` records each requested mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateOutcome {
    pub key: String,
    pub summary: String,
    pub status: String,
    pub changes: Vec<String>,
    pub url: String,
}

/// Result of `transition_issue`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionOutcome {
    pub issue_key: String,
    pub previous_status: String,
    pub new_status: String,
    pub comment_added: bool,
    pub url: String,
}

/// Result of a confirmed `delete_issue`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteOutcome {
    pub key: String,
    pub summary: String,
    /// Derived from the issue key prefix before the separator
    pub project: String,
}

/// Result of `add_comment`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentOutcome {
    pub issue_key: String,
    pub comment_id: String,
    pub comment_text: String,
    pub author: String,
    pub created: String,
    pub url: String,
}

/// Result of `search_users`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSearchResults {
    pub query: String,
    pub total: usize,
    pub users: Vec<UserRecord>,
}
