//! # jiratools-api
//!
//! The remote-collaborator boundary for jira-tools: wire records mirroring
//! the Jira REST API's partially-optional data model, the [`JiraApi`] trait
//! covering the ten remote capabilities the facade depends on, and a
//! reqwest-backed implementation.
//!
//! Nothing in this crate makes decisions about missing data or workflow
//! state; it moves records across the wire as-is. Normalization and
//! transition resolution live in `jiratools-issues`.

pub mod client;
pub mod http;
pub mod models;

#[cfg(any(test, feature = "test-support"))]
pub mod mock;

pub use client::{ApiResult, JiraApi, JiraApiError, JiraClientProvider};
pub use http::{HttpJiraClient, HttpJiraProvider};
pub use models::{
    CreatedIssue, RemoteComment, RemoteComments, RemoteFields, RemoteIssue, RemoteNamed,
    RemoteProject, RemoteProjectRef, RemoteSearchPage, RemoteTransition, RemoteTransitionPage,
    RemoteUser, RemoteUserRef,
};
