//! Facade operations
//!
//! The nine callable operations. Each one acquires its own client handle
//! from the provider, runs a strictly sequential series of remote calls,
//! and shapes the result through the normalizer. No state survives between
//! calls and nothing is cached; the transition set in particular is fetched
//! fresh every time because the workflow graph can change between calls.
//!
//! Validation errors (`ConfirmationRequired`, `EmptyQuery`) fire before the
//! client is acquired, so the failing paths make zero remote calls.

use serde_json::json;

use jiratools_api::{JiraApi, JiraClientProvider};
use jiratools_common::{JiraToolsError, Result};

use crate::normalize::{self, FieldSelection};
use crate::transitions;
use crate::types::{
    CommentOutcome, CreatedIssueRecord, DeleteOutcome, IssueDetail, ProjectRecord, SearchResults,
    TransitionOutcome, UpdateOutcome, UserSearchResults,
};

/// Page size for the user directory search.
const USER_SEARCH_MAX_RESULTS: u32 = 10;

/// Inputs to [`create_issue`].
#[derive(Debug, Clone)]
pub struct CreateIssueRequest {
    pub project_key: String,
    pub summary: String,
    pub description: Option<String>,
    pub issue_type: String,
    pub priority: Option<String>,
    pub assignee: Option<String>,
}

/// Inputs to [`update_issue`]. Every member is independent; `None` means
/// "leave alone".
#[derive(Debug, Clone, Default)]
pub struct UpdateIssueRequest {
    pub summary: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assignee: Option<String>,
    pub comment: Option<String>,
}

async fn fetch_required(api: &dyn JiraApi, key: &str) -> Result<jiratools_api::RemoteIssue> {
    match api.get_issue(key).await? {
        Some(issue) => Ok(issue),
        None => Err(JiraToolsError::IssueNotFound(key.to_string())),
    }
}

fn project_from_key(key: &str) -> String {
    key.split('-').next().unwrap_or(key).to_string()
}

/// Run a JQL search and return one page of normalized hits.
///
/// `key` and `summary` are always included in each hit; the rest of the
/// comma-separated `fields` list controls the optional members.
pub async fn search_issues(
    provider: &dyn JiraClientProvider,
    jql: &str,
    max_results: u32,
    fields: &str,
) -> Result<SearchResults> {
    tracing::debug!(jql, max_results, "searching issues");
    let selection = FieldSelection::parse(fields);
    let api = provider.acquire().await?;
    let hits = api.search(jql, max_results, selection.as_slice()).await?;
    let issues: Vec<_> = hits
        .iter()
        .map(|issue| normalize::issue_summary(issue, &selection))
        .collect();
    tracing::info!(total = issues.len(), "search complete");
    Ok(SearchResults {
        total: issues.len(),
        issues,
    })
}

/// Create an issue and report its key and browse URL.
pub async fn create_issue(
    provider: &dyn JiraClientProvider,
    request: &CreateIssueRequest,
) -> Result<CreatedIssueRecord> {
    tracing::debug!(project = %request.project_key, "creating issue");
    let mut fields = json!({
        "project": { "key": request.project_key },
        "summary": request.summary,
        "issuetype": { "name": request.issue_type },
    });
    if let Some(description) = &request.description {
        fields["description"] = json!(description);
    }
    if let Some(priority) = &request.priority {
        fields["priority"] = json!({ "name": priority });
    }
    if let Some(assignee) = &request.assignee {
        fields["assignee"] = json!({ "name": assignee });
    }

    let api = provider.acquire().await?;
    let created = api.create_issue(&fields).await?;
    tracing::info!(key = %created.key, "issue created");
    Ok(CreatedIssueRecord {
        url: normalize::browse_url(api.server_base(), &created.key),
        key: created.key,
        summary: request.summary.clone(),
        project: request.project_key.clone(),
    })
}

/// Apply the requested field mutations, then optionally a comment and a
/// status transition, accumulating a change log.
///
/// Writes are independent and non-transactional: a failure partway through
/// leaves earlier writes applied. The returned `summary`/`status` come from
/// a single re-fetch after all mutations.
pub async fn update_issue(
    provider: &dyn JiraClientProvider,
    issue_key: &str,
    request: &UpdateIssueRequest,
) -> Result<UpdateOutcome> {
    tracing::debug!(issue_key, "updating issue");
    let api = provider.acquire().await?;
    fetch_required(api.as_ref(), issue_key).await?;

    let mut changes = Vec::new();

    if let Some(summary) = &request.summary {
        api.update_fields(issue_key, &json!({ "summary": summary }))
            .await?;
        changes.push(format!("Summary updated to: {summary}"));
    }
    if let Some(description) = &request.description {
        api.update_fields(issue_key, &json!({ "description": description }))
            .await?;
        changes.push("Description updated".to_string());
    }
    if let Some(priority) = &request.priority {
        api.update_fields(issue_key, &json!({ "priority": { "name": priority } }))
            .await?;
        changes.push(format!("Priority set to: {priority}"));
    }
    if let Some(assignee) = &request.assignee {
        api.update_fields(issue_key, &json!({ "assignee": { "name": assignee } }))
            .await?;
        changes.push(format!("Assigned to: {assignee}"));
    }
    if let Some(comment) = &request.comment {
        api.add_comment(issue_key, comment).await?;
        changes.push("Comment added".to_string());
    }
    if let Some(status) = &request.status {
        let available = api.list_transitions(issue_key).await?;
        let transition = transitions::resolve(status, &available)?;
        api.apply_transition(issue_key, &transition.id, None).await?;
        changes.push(format!("Status changed to: {}", transition.name));
    }

    let issue = fetch_required(api.as_ref(), issue_key).await?;
    tracing::info!(issue_key, changes = changes.len(), "issue updated");
    Ok(UpdateOutcome {
        key: issue.key.clone(),
        summary: issue
            .fields
            .summary
            .clone()
            .unwrap_or_else(|| normalize::NO_SUMMARY.to_string()),
        status: normalize::status_name(&issue),
        changes,
        url: normalize::browse_url(api.server_base(), issue_key),
    })
}

/// Delete an issue. Refuses without explicit confirmation, before any
/// client is constructed or contacted.
pub async fn delete_issue(
    provider: &dyn JiraClientProvider,
    issue_key: &str,
    confirm: bool,
) -> Result<DeleteOutcome> {
    if !confirm {
        return Err(JiraToolsError::ConfirmationRequired);
    }

    tracing::debug!(issue_key, "deleting issue");
    let api = provider.acquire().await?;
    let issue = fetch_required(api.as_ref(), issue_key).await?;
    let summary = issue
        .fields
        .summary
        .clone()
        .unwrap_or_else(|| normalize::NO_SUMMARY.to_string());
    api.delete_issue(issue_key).await?;
    tracing::info!(issue_key, "issue deleted");
    Ok(DeleteOutcome {
        key: issue_key.to_string(),
        summary,
        project: project_from_key(issue_key),
    })
}

/// Attach a comment to an existing issue.
pub async fn add_comment(
    provider: &dyn JiraClientProvider,
    issue_key: &str,
    comment: &str,
) -> Result<CommentOutcome> {
    tracing::debug!(issue_key, "adding comment");
    let api = provider.acquire().await?;
    fetch_required(api.as_ref(), issue_key).await?;
    let posted = normalize::comment(&api.add_comment(issue_key, comment).await?);
    tracing::info!(issue_key, comment_id = %posted.id, "comment added");
    Ok(CommentOutcome {
        issue_key: issue_key.to_string(),
        url: normalize::comment_url(api.server_base(), issue_key, &posted.id),
        comment_id: posted.id,
        comment_text: posted.body,
        author: posted.author,
        created: posted.created,
    })
}

/// Move an issue to a new workflow status by name.
///
/// The target name is matched case-insensitively against the issue's live
/// transition set; a comment, when supplied, rides in the same transition
/// request so "transition + comment" stays one remote operation.
pub async fn transition_issue(
    provider: &dyn JiraClientProvider,
    issue_key: &str,
    status: &str,
    comment: Option<&str>,
) -> Result<TransitionOutcome> {
    tracing::debug!(issue_key, status, "transitioning issue");
    let api = provider.acquire().await?;
    let issue = fetch_required(api.as_ref(), issue_key).await?;
    let previous_status = normalize::status_name(&issue);

    let available = api.list_transitions(issue_key).await?;
    let transition = transitions::resolve(status, &available)?;
    api.apply_transition(issue_key, &transition.id, comment)
        .await?;

    let after = fetch_required(api.as_ref(), issue_key).await?;
    let new_status = normalize::status_name(&after);
    tracing::info!(issue_key, %previous_status, %new_status, "issue transitioned");
    Ok(TransitionOutcome {
        issue_key: issue_key.to_string(),
        previous_status,
        new_status,
        comment_added: comment.is_some(),
        url: normalize::browse_url(api.server_base(), issue_key),
    })
}

/// Fetch one issue in full, including its live transition set.
pub async fn get_issue_details(
    provider: &dyn JiraClientProvider,
    issue_key: &str,
    include_comments: bool,
) -> Result<IssueDetail> {
    tracing::debug!(issue_key, include_comments, "fetching issue details");
    let api = provider.acquire().await?;
    let issue = fetch_required(api.as_ref(), issue_key).await?;
    let transitions = api.list_transitions(issue_key).await?;
    Ok(normalize::issue_detail(
        &issue,
        &transitions,
        include_comments,
        api.server_base(),
    ))
}

/// List up to `limit` projects.
pub async fn list_projects(
    provider: &dyn JiraClientProvider,
    limit: usize,
) -> Result<Vec<ProjectRecord>> {
    tracing::debug!(limit, "listing projects");
    let api = provider.acquire().await?;
    let projects = api.list_projects().await?;
    Ok(projects.iter().take(limit).map(normalize::project).collect())
}

/// Search the user directory. Empty queries fail before any remote call;
/// zero matches is success with an empty list.
pub async fn search_users(
    provider: &dyn JiraClientProvider,
    query: &str,
    include_inactive_users: bool,
) -> Result<UserSearchResults> {
    if query.trim().is_empty() {
        return Err(JiraToolsError::EmptyQuery);
    }

    tracing::debug!(query, include_inactive_users, "searching users");
    let api = provider.acquire().await?;
    let found = api
        .search_users(query, USER_SEARCH_MAX_RESULTS, include_inactive_users)
        .await?;
    let users: Vec<_> = found.iter().map(normalize::user).collect();
    tracing::info!(query, total = users.len(), "user search complete");
    Ok(UserSearchResults {
        query: query.to_string(),
        total: users.len(),
        users,
    })
}
