//! # jiratools-issues
//!
//! The issue facade: normalizes the remote tracker's partially-optional
//! data model into a stable response schema, resolves human-supplied status
//! names against each issue's live workflow transitions, and exposes the
//! nine operations the tool layer calls.
//!
//! Operations are stateless between calls. Each acquires its own client
//! handle through [`jiratools_api::JiraClientProvider`], so concurrent
//! callers never share mutable state, and authoritative state such as the
//! transition set is re-fetched instead of trusted from a prior read.

pub mod normalize;
pub mod operations;
pub mod transitions;
pub mod types;

pub use operations::{
    add_comment, create_issue, delete_issue, get_issue_details, list_projects, search_issues,
    search_users, transition_issue, update_issue, CreateIssueRequest, UpdateIssueRequest,
};
pub use types::{
    CommentOutcome, CommentRecord, CreatedIssueRecord, DeleteOutcome, IssueDetail, IssueSummary,
    ProjectInfo, ProjectRecord, SearchResults, TransitionOutcome, UpdateOutcome, UserRecord,
    UserSearchResults,
};
