//! Request types for MCP tool arguments
//!
//! One deserializable struct per tool, with serde defaults mirroring the
//! documented parameter defaults.

use serde::{Deserialize, Serialize};

fn default_max_results() -> u32 {
    10
}

fn default_fields() -> String {
    "summary,status,assignee,priority,issuetype".to_string()
}

fn default_issue_type() -> String {
    "Task".to_string()
}

fn default_limit() -> usize {
    10
}

/// Request structure for searching issues with JQL.
#[derive(Debug, Deserialize, Serialize)]
pub struct SearchIssuesRequest {
    /// JQL query string
    pub jql: String,
    /// Maximum number of results to return
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// Comma-separated list of fields to include per issue
    #[serde(default = "default_fields")]
    pub fields: String,
}

/// Request structure for creating an issue.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateIssueRequest {
    /// Key of the project to create the issue in
    pub project_key: String,
    /// Issue summary
    pub summary: String,
    /// Issue description
    pub description: Option<String>,
    /// Issue type name
    #[serde(default = "default_issue_type")]
    pub issue_type: String,
    /// Priority name
    pub priority: Option<String>,
    /// Assignee name
    pub assignee: Option<String>,
}

/// Request structure for updating an issue.
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateIssueRequest {
    /// Key of the issue to update
    pub issue_key: String,
    /// New summary
    pub summary: Option<String>,
    /// New description
    pub description: Option<String>,
    /// Target status name, resolved against the issue's live transitions
    pub status: Option<String>,
    /// New priority name
    pub priority: Option<String>,
    /// New assignee name
    pub assignee: Option<String>,
    /// Comment to add alongside the update
    pub comment: Option<String>,
}

/// Request structure for deleting an issue.
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteIssueRequest {
    /// Key of the issue to delete
    pub issue_key: String,
    /// Must be `true` for the deletion to proceed
    #[serde(default)]
    pub confirm: bool,
}

/// Request structure for commenting on an issue.
#[derive(Debug, Deserialize, Serialize)]
pub struct AddCommentRequest {
    /// Key of the issue to comment on
    pub issue_key: String,
    /// Comment body
    pub comment: String,
}

/// Request structure for transitioning an issue.
#[derive(Debug, Deserialize, Serialize)]
pub struct TransitionIssueRequest {
    /// Key of the issue to transition
    pub issue_key: String,
    /// Target status name, matched case-insensitively
    pub status: String,
    /// Comment attached atomically with the transition
    pub comment: Option<String>,
}

/// Request structure for fetching full issue details.
#[derive(Debug, Deserialize, Serialize)]
pub struct IssueDetailsRequest {
    /// Key of the issue to fetch
    pub issue_key: String,
    /// Include the issue's comments in the response
    #[serde(default)]
    pub include_comments: bool,
}

/// Request structure for listing projects.
#[derive(Debug, Deserialize, Serialize)]
pub struct ListProjectsRequest {
    /// Maximum number of projects to return
    #[serde(default = "default_limit")]
    pub limit: usize,
}

/// Request structure for searching users.
#[derive(Debug, Deserialize, Serialize)]
pub struct SearchUsersRequest {
    /// Name or email fragment to search for
    pub query: String,
    /// Include inactive accounts in the results
    #[serde(default)]
    pub include_inactive_users: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_request_applies_defaults() {
        let request: SearchIssuesRequest =
            serde_json::from_value(serde_json::json!({"jql": "project = TEST"})).unwrap();
        assert_eq!(request.max_results, 10);
        assert_eq!(request.fields, "summary,status,assignee,priority,issuetype");
    }

    #[test]
    fn create_request_defaults_issue_type_to_task() {
        let request: CreateIssueRequest = serde_json::from_value(serde_json::json!({
            "project_key": "TEST",
            "summary": "A task",
        }))
        .unwrap();
        assert_eq!(request.issue_type, "Task");
        assert!(request.priority.is_none());
    }

    #[test]
    fn delete_request_defaults_to_unconfirmed() {
        let request: DeleteIssueRequest =
            serde_json::from_value(serde_json::json!({"issue_key": "TEST-1"})).unwrap();
        assert!(!request.confirm);
    }

    #[test]
    fn details_request_defaults_to_no_comments() {
        let request: IssueDetailsRequest =
            serde_json::from_value(serde_json::json!({"issue_key": "TEST-1"})).unwrap();
        assert!(!request.include_comments);
    }
}
