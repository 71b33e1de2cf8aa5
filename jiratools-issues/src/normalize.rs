//! Response Normalizer
//!
//! Maps possibly-partial remote records into the stable output schema. Pure
//! transforms: nothing here can fail on missing optional data, and every
//! optional field of the fixed schema gets its documented default instead of
//! being omitted. A missing required identifier (no `key`) never reaches this
//! layer — the facade fails with `IssueNotFound` first.

use jiratools_api::models::{
    RemoteComment, RemoteIssue, RemoteNamed, RemoteProject, RemoteTransition, RemoteUser,
    RemoteUserRef,
};

use crate::types::{
    CommentRecord, IssueDetail, IssueSummary, ProjectInfo, ProjectRecord, UserRecord,
};

/// Default for unknown names (status, people, project, user attributes)
pub const UNKNOWN: &str = "Unknown";
/// Default when no assignee is set
pub const UNASSIGNED: &str = "Unassigned";
/// Default when no priority is set
pub const NO_PRIORITY: &str = "None";
/// Default when the remote record has no summary
pub const NO_SUMMARY: &str = "No summary provided";
/// Default when the remote record has no description
pub const NO_DESCRIPTION: &str = "None";

/// The caller's comma-separated field request for search, parsed.
///
/// `key` and `summary` are included unconditionally regardless of the list.
#[derive(Debug, Clone, Default)]
pub struct FieldSelection(Vec<String>);

impl FieldSelection {
    /// Parse a comma-separated field list, trimming blank entries.
    pub fn parse(csv: &str) -> Self {
        Self(
            csv.split(',')
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty())
                .collect(),
        )
    }

    /// Whether the caller asked for this field.
    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|f| f == field)
    }

    /// The raw list, forwarded to the remote search request.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

fn named(value: &Option<RemoteNamed>) -> Option<String> {
    value.as_ref().map(|n| n.name.clone())
}

fn display_name(value: &Option<RemoteUserRef>) -> Option<String> {
    value.as_ref().and_then(|u| u.display_name.clone())
}

/// Browse URL for an issue.
pub fn browse_url(server: &str, key: &str) -> String {
    format!("{server}/browse/{key}")
}

/// Browse URL focused on one comment.
pub fn comment_url(server: &str, key: &str, comment_id: &str) -> String {
    format!("{server}/browse/{key}?focusedCommentId={comment_id}")
}

/// Shape one search hit. Optional members are governed by the caller's
/// request, not by sentinel substitution: a field appears only when it was
/// requested and the remote record carries it.
pub fn issue_summary(issue: &RemoteIssue, selection: &FieldSelection) -> IssueSummary {
    let fields = &issue.fields;
    IssueSummary {
        key: issue.key.clone(),
        summary: fields
            .summary
            .clone()
            .unwrap_or_else(|| NO_SUMMARY.to_string()),
        status: named(&fields.status).filter(|_| selection.contains("status")),
        assignee: display_name(&fields.assignee).filter(|_| selection.contains("assignee")),
        priority: named(&fields.priority).filter(|_| selection.contains("priority")),
        issuetype: named(&fields.issuetype).filter(|_| selection.contains("issuetype")),
    }
}

/// Current status name, or the documented default.
pub fn status_name(issue: &RemoteIssue) -> String {
    named(&issue.fields.status).unwrap_or_else(|| UNKNOWN.to_string())
}

/// Shape a full issue record. `transitions` must come from a fresh
/// `listTransitions` call against the same issue state.
pub fn issue_detail(
    issue: &RemoteIssue,
    transitions: &[RemoteTransition],
    include_comments: bool,
    server: &str,
) -> IssueDetail {
    let fields = &issue.fields;
    let project = fields
        .project
        .as_ref()
        .map(|p| ProjectInfo {
            key: p.key.clone(),
            name: p.name.clone(),
        })
        .unwrap_or_else(|| ProjectInfo {
            key: UNKNOWN.to_string(),
            name: UNKNOWN.to_string(),
        });

    let comments = include_comments.then(|| {
        fields
            .comment
            .as_ref()
            .map(|c| c.comments.iter().map(comment).collect())
            .unwrap_or_default()
    });

    IssueDetail {
        key: issue.key.clone(),
        summary: fields
            .summary
            .clone()
            .unwrap_or_else(|| NO_SUMMARY.to_string()),
        description: fields
            .description
            .clone()
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        status: status_name(issue),
        issue_type: named(&fields.issuetype).unwrap_or_else(|| UNKNOWN.to_string()),
        project,
        created: fields.created.clone().unwrap_or_else(|| UNKNOWN.to_string()),
        updated: fields.updated.clone().unwrap_or_else(|| UNKNOWN.to_string()),
        creator: display_name(&fields.creator).unwrap_or_else(|| UNKNOWN.to_string()),
        reporter: display_name(&fields.reporter).unwrap_or_else(|| UNKNOWN.to_string()),
        assignee: display_name(&fields.assignee).unwrap_or_else(|| UNASSIGNED.to_string()),
        priority: named(&fields.priority).unwrap_or_else(|| NO_PRIORITY.to_string()),
        labels: fields.labels.clone(),
        available_transitions: transitions.iter().map(|t| t.name.clone()).collect(),
        url: browse_url(server, &issue.key),
        comments,
    }
}

/// Shape one comment. `updated` falls back to `created` so every comment
/// serializes the full five-key schema.
pub fn comment(remote: &RemoteComment) -> CommentRecord {
    let created = remote.created.clone().unwrap_or_else(|| UNKNOWN.to_string());
    CommentRecord {
        id: remote.id.clone(),
        body: remote.body.clone().unwrap_or_default(),
        author: display_name(&remote.author).unwrap_or_else(|| UNKNOWN.to_string()),
        updated: remote.updated.clone().unwrap_or_else(|| created.clone()),
        created,
    }
}

/// Shape one project listing entry.
pub fn project(remote: &RemoteProject) -> ProjectRecord {
    ProjectRecord {
        key: remote.key.clone(),
        name: remote.name.clone(),
        lead: display_name(&remote.lead).unwrap_or_else(|| UNKNOWN.to_string()),
    }
}

/// Shape one user directory entry.
pub fn user(remote: &RemoteUser) -> UserRecord {
    UserRecord {
        account_id: remote.account_id.clone(),
        display_name: remote
            .display_name
            .clone()
            .unwrap_or_else(|| UNKNOWN.to_string()),
        email: remote
            .email_address
            .clone()
            .unwrap_or_else(|| UNKNOWN.to_string()),
        active: remote.active,
        time_zone: remote
            .time_zone
            .clone()
            .unwrap_or_else(|| UNKNOWN.to_string()),
        locale: remote.locale.clone().unwrap_or_else(|| UNKNOWN.to_string()),
        avatar_url: remote
            .avatar_url()
            .map(str::to_string)
            .unwrap_or_else(|| UNKNOWN.to_string()),
    }
}
