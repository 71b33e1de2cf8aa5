//! Wire records for the Jira Cloud REST API
//!
//! The remote data model is heterogeneous and partially optional: which
//! members an issue carries depends on the server configuration and on the
//! fields requested. Every member that can be absent is an `Option` here;
//! substituting documented defaults is the normalizer's job, not this
//! crate's.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An issue as returned by `GET /rest/api/2/issue/{key}` or a search page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteIssue {
    /// Immutable issue key, e.g. `TEST-123`
    pub key: String,
    /// Field bag; members present only if requested and set upstream
    #[serde(default)]
    pub fields: RemoteFields,
}

/// The `fields` member of a remote issue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteFields {
    pub summary: Option<String>,
    pub description: Option<String>,
    pub status: Option<RemoteNamed>,
    pub assignee: Option<RemoteUserRef>,
    pub priority: Option<RemoteNamed>,
    pub issuetype: Option<RemoteNamed>,
    pub project: Option<RemoteProjectRef>,
    pub creator: Option<RemoteUserRef>,
    pub reporter: Option<RemoteUserRef>,
    #[serde(default)]
    pub labels: Vec<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub comment: Option<RemoteComments>,
}

/// A `{name}` object (status, priority, issue type).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteNamed {
    pub name: String,
}

/// A user reference embedded in an issue or comment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteUserRef {
    pub display_name: Option<String>,
}

/// The project reference embedded in an issue's fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteProjectRef {
    pub key: String,
    pub name: String,
}

/// The `comment` container inside an issue's fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteComments {
    #[serde(default)]
    pub comments: Vec<RemoteComment>,
}

/// A single issue comment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteComment {
    pub id: String,
    pub body: Option<String>,
    pub author: Option<RemoteUserRef>,
    pub created: Option<String>,
    pub updated: Option<String>,
}

/// An edge in the issue's current workflow graph.
///
/// The set of valid edges is a function of the issue's current status and is
/// fetched fresh before every transition attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteTransition {
    pub id: String,
    pub name: String,
}

/// Container returned by `GET /rest/api/2/issue/{key}/transitions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteTransitionPage {
    #[serde(default)]
    pub transitions: Vec<RemoteTransition>,
}

/// One page of search results from `GET /rest/api/2/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteSearchPage {
    #[serde(default)]
    pub issues: Vec<RemoteIssue>,
}

/// Reference returned when an issue is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedIssue {
    pub key: String,
}

/// A project as returned by `GET /rest/api/2/project`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteProject {
    pub key: String,
    pub name: String,
    pub lead: Option<RemoteUserRef>,
}

/// A user record from `GET /rest/api/2/user/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteUser {
    pub account_id: String,
    pub display_name: Option<String>,
    pub email_address: Option<String>,
    #[serde(default)]
    pub active: bool,
    pub time_zone: Option<String>,
    pub locale: Option<String>,
    #[serde(default)]
    pub avatar_urls: HashMap<String, String>,
}

impl RemoteUser {
    /// Largest avatar the API advertises, if any.
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_urls.get("48x48").map(String::as_str)
    }
}
