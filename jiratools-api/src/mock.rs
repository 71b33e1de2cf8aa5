//! In-memory [`JiraApi`] double for tests
//!
//! Records every remote call so tests can assert call counts — in
//! particular that validation failures short-circuit before any remote call,
//! and that the unconfirmed delete path never even acquires a client.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::client::{ApiResult, JiraApi, JiraApiError, JiraClientProvider};
use crate::models::{
    CreatedIssue, RemoteComment, RemoteIssue, RemoteNamed, RemoteProject, RemoteTransition,
    RemoteUser, RemoteUserRef,
};

/// Scripted in-memory Jira instance.
pub struct MockJira {
    server: String,
    issues: Mutex<HashMap<String, RemoteIssue>>,
    search_results: Mutex<Vec<RemoteIssue>>,
    transitions: Mutex<Vec<RemoteTransition>>,
    users: Mutex<Vec<RemoteUser>>,
    projects: Mutex<Vec<RemoteProject>>,
    created_key: Mutex<String>,
    failing: Mutex<Option<String>>,
    calls: Mutex<Vec<String>>,
}

impl MockJira {
    /// New empty instance serving from the given base URL.
    pub fn new(server: &str) -> Self {
        Self {
            server: server.trim_end_matches('/').to_string(),
            issues: Mutex::new(HashMap::new()),
            search_results: Mutex::new(Vec::new()),
            transitions: Mutex::new(Vec::new()),
            users: Mutex::new(Vec::new()),
            projects: Mutex::new(Vec::new()),
            created_key: Mutex::new("TEST-123".to_string()),
            failing: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Seed an issue record.
    pub fn put_issue(&self, issue: RemoteIssue) {
        self.issues.lock().unwrap().insert(issue.key.clone(), issue);
    }

    /// Seed the single search-result page.
    pub fn set_search_results(&self, issues: Vec<RemoteIssue>) {
        *self.search_results.lock().unwrap() = issues;
    }

    /// Seed the live transition set.
    pub fn set_transitions(&self, transitions: Vec<RemoteTransition>) {
        *self.transitions.lock().unwrap() = transitions;
    }

    /// Seed the user directory.
    pub fn set_users(&self, users: Vec<RemoteUser>) {
        *self.users.lock().unwrap() = users;
    }

    /// Seed the project list.
    pub fn set_projects(&self, projects: Vec<RemoteProject>) {
        *self.projects.lock().unwrap() = projects;
    }

    /// Key the next `create_issue` call reports.
    pub fn set_created_key(&self, key: &str) {
        *self.created_key.lock().unwrap() = key.to_string();
    }

    /// Make every subsequent capability fail with a remote error.
    pub fn fail_with(&self, message: &str) {
        *self.failing.lock().unwrap() = Some(message.to_string());
    }

    /// Every call recorded so far, as `"capability:detail"` strings.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls whose label starts with `prefix`.
    pub fn call_count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn record(&self, label: String) -> ApiResult<()> {
        self.calls.lock().unwrap().push(label);
        if let Some(message) = self.failing.lock().unwrap().clone() {
            return Err(JiraApiError::Http {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: message,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl JiraApi for MockJira {
    fn server_base(&self) -> &str {
        &self.server
    }

    async fn get_issue(&self, key: &str) -> ApiResult<Option<RemoteIssue>> {
        self.record(format!("get_issue:{key}"))?;
        Ok(self.issues.lock().unwrap().get(key).cloned())
    }

    async fn search(
        &self,
        jql: &str,
        max_results: u32,
        _fields: &[String],
    ) -> ApiResult<Vec<RemoteIssue>> {
        self.record(format!("search:{jql}"))?;
        let results = self.search_results.lock().unwrap();
        Ok(results.iter().take(max_results as usize).cloned().collect())
    }

    async fn create_issue(&self, fields: &Value) -> ApiResult<CreatedIssue> {
        self.record(format!("create_issue:{fields}"))?;
        Ok(CreatedIssue {
            key: self.created_key.lock().unwrap().clone(),
        })
    }

    async fn update_fields(&self, key: &str, fields: &Value) -> ApiResult<()> {
        self.record(format!("update_fields:{key}:{fields}"))?;
        // Mirror a summary write into the stored record so a later re-fetch
        // sees the final state.
        if let Some(summary) = fields.get("summary").and_then(Value::as_str) {
            let mut issues = self.issues.lock().unwrap();
            if let Some(issue) = issues.get_mut(key) {
                issue.fields.summary = Some(summary.to_string());
            }
        }
        Ok(())
    }

    async fn add_comment(&self, key: &str, body: &str) -> ApiResult<RemoteComment> {
        self.record(format!("add_comment:{key}"))?;
        Ok(RemoteComment {
            id: "12345".to_string(),
            body: Some(body.to_string()),
            author: Some(RemoteUserRef {
                display_name: Some("Test User".to_string()),
            }),
            created: Some("2024-03-21T10:00:00.000+0000".to_string()),
            updated: None,
        })
    }

    async fn list_transitions(&self, key: &str) -> ApiResult<Vec<RemoteTransition>> {
        self.record(format!("list_transitions:{key}"))?;
        Ok(self.transitions.lock().unwrap().clone())
    }

    async fn apply_transition(
        &self,
        key: &str,
        transition_id: &str,
        comment: Option<&str>,
    ) -> ApiResult<()> {
        self.record(format!(
            "apply_transition:{key}:{transition_id}:comment={}",
            comment.is_some()
        ))?;
        // Move the stored record to the transition's target status so the
        // post-transition re-fetch observes the new state.
        let name = self
            .transitions
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == transition_id)
            .map(|t| t.name.clone());
        if let Some(name) = name {
            let mut issues = self.issues.lock().unwrap();
            if let Some(issue) = issues.get_mut(key) {
                issue.fields.status = Some(RemoteNamed { name });
            }
        }
        Ok(())
    }

    async fn delete_issue(&self, key: &str) -> ApiResult<()> {
        self.record(format!("delete_issue:{key}"))?;
        self.issues.lock().unwrap().remove(key);
        Ok(())
    }

    async fn search_users(
        &self,
        query: &str,
        _max_results: u32,
        include_inactive: bool,
    ) -> ApiResult<Vec<RemoteUser>> {
        self.record(format!("search_users:{query}:inactive={include_inactive}"))?;
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .filter(|u| u.active || include_inactive)
            .cloned()
            .collect())
    }

    async fn list_projects(&self) -> ApiResult<Vec<RemoteProject>> {
        self.record("list_projects".to_string())?;
        Ok(self.projects.lock().unwrap().clone())
    }
}

/// Provider wrapper that counts acquisitions.
pub struct MockJiraProvider {
    api: Arc<MockJira>,
    acquisitions: AtomicUsize,
}

impl MockJiraProvider {
    /// Wrap a scripted instance.
    pub fn new(api: Arc<MockJira>) -> Self {
        Self {
            api,
            acquisitions: AtomicUsize::new(0),
        }
    }

    /// How many times an operation acquired a client handle.
    pub fn acquisitions(&self) -> usize {
        self.acquisitions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JiraClientProvider for MockJiraProvider {
    async fn acquire(&self) -> jiratools_common::Result<Arc<dyn JiraApi>> {
        self.acquisitions.fetch_add(1, Ordering::SeqCst);
        Ok(self.api.clone())
    }
}
