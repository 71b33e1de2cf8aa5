//! reqwest-backed implementation of [`JiraApi`] against the Jira REST v2 API

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::{json, Value};

use jiratools_common::JiraToolsError;
use jiratools_config::JiraConfig;

use crate::client::{ApiResult, JiraApi, JiraApiError, JiraClientProvider};
use crate::models::{
    CreatedIssue, RemoteComment, RemoteIssue, RemoteProject, RemoteSearchPage, RemoteTransition,
    RemoteTransitionPage, RemoteUser,
};

/// Request timeout for every remote call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for one authenticated Jira connection.
#[derive(Clone)]
pub struct HttpJiraClient {
    client: Client,
    config: JiraConfig,
}

impl HttpJiraClient {
    /// Build a client from validated connection settings.
    pub fn new(config: JiraConfig) -> ApiResult<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/rest/api/2/{}", self.config.server, path)
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.config.email, Some(&self.config.api_token))
    }

    /// Map a non-success response to `JiraApiError::Http`, preserving the
    /// remote body verbatim.
    async fn check(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%status, "JIRA API request failed");
        Err(JiraApiError::Http { status, body })
    }
}

#[async_trait]
impl JiraApi for HttpJiraClient {
    fn server_base(&self) -> &str {
        &self.config.server
    }

    async fn get_issue(&self, key: &str) -> ApiResult<Option<RemoteIssue>> {
        let url = self.api_url(&format!("issue/{key}"));
        let response = self.authed(self.client.get(&url)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::check(response).await?;
        Ok(Some(response.json::<RemoteIssue>().await?))
    }

    async fn search(
        &self,
        jql: &str,
        max_results: u32,
        fields: &[String],
    ) -> ApiResult<Vec<RemoteIssue>> {
        let url = self.api_url("search");
        let response = self
            .authed(self.client.get(&url))
            .query(&[
                ("jql", jql),
                ("maxResults", &max_results.to_string()),
                ("fields", &fields.join(",")),
            ])
            .send()
            .await?;
        let page: RemoteSearchPage = Self::check(response).await?.json().await?;
        Ok(page.issues)
    }

    async fn create_issue(&self, fields: &Value) -> ApiResult<CreatedIssue> {
        let url = self.api_url("issue");
        let response = self
            .authed(self.client.post(&url))
            .json(&json!({ "fields": fields }))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn update_fields(&self, key: &str, fields: &Value) -> ApiResult<()> {
        let url = self.api_url(&format!("issue/{key}"));
        let response = self
            .authed(self.client.put(&url))
            .json(&json!({ "fields": fields }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn add_comment(&self, key: &str, body: &str) -> ApiResult<RemoteComment> {
        let url = self.api_url(&format!("issue/{key}/comment"));
        let response = self
            .authed(self.client.post(&url))
            .json(&json!({ "body": body }))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn list_transitions(&self, key: &str) -> ApiResult<Vec<RemoteTransition>> {
        let url = self.api_url(&format!("issue/{key}/transitions"));
        let response = self.authed(self.client.get(&url)).send().await?;
        let page: RemoteTransitionPage = Self::check(response).await?.json().await?;
        Ok(page.transitions)
    }

    async fn apply_transition(
        &self,
        key: &str,
        transition_id: &str,
        comment: Option<&str>,
    ) -> ApiResult<()> {
        let url = self.api_url(&format!("issue/{key}/transitions"));
        let mut payload = json!({ "transition": { "id": transition_id } });
        if let Some(body) = comment {
            // Comment rides in the transition payload so the pair is one
            // remote operation.
            payload["update"] = json!({ "comment": [ { "add": { "body": body } } ] });
        }
        let response = self
            .authed(self.client.post(&url))
            .json(&payload)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn delete_issue(&self, key: &str) -> ApiResult<()> {
        let url = self.api_url(&format!("issue/{key}"));
        let response = self.authed(self.client.delete(&url)).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn search_users(
        &self,
        query: &str,
        max_results: u32,
        include_inactive: bool,
    ) -> ApiResult<Vec<RemoteUser>> {
        let url = self.api_url("user/search");
        let response = self
            .authed(self.client.get(&url))
            .query(&[
                ("query", query),
                ("maxResults", &max_results.to_string()),
                ("includeActive", "true"),
                ("includeInactive", if include_inactive { "true" } else { "false" }),
            ])
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn list_projects(&self) -> ApiResult<Vec<RemoteProject>> {
        let url = self.api_url("project");
        let response = self.authed(self.client.get(&url)).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }
}

/// Provider that builds a fresh [`HttpJiraClient`] per operation.
#[derive(Clone)]
pub struct HttpJiraProvider {
    config: JiraConfig,
}

impl HttpJiraProvider {
    /// Create a provider around validated connection settings.
    pub fn new(config: JiraConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl JiraClientProvider for HttpJiraProvider {
    async fn acquire(&self) -> jiratools_common::Result<Arc<dyn JiraApi>> {
        let client = HttpJiraClient::new(self.config.clone()).map_err(JiraToolsError::from)?;
        Ok(Arc::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> HttpJiraClient {
        HttpJiraClient::new(JiraConfig {
            server: server.uri(),
            email: "test@example.com".to_string(),
            api_token: "fake-token".to_string(),
        })
        .expect("client should build")
    }

    fn issue_body(key: &str, status: &str) -> serde_json::Value {
        json!({
            "key": key,
            "fields": {
                "summary": "Test Issue",
                "status": {"name": status}
            }
        })
    }

    #[tokio::test]
    async fn get_issue_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/issue/TEST-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(issue_body("TEST-123", "Open")))
            .mount(&server)
            .await;

        let issue = test_client(&server)
            .get_issue("TEST-123")
            .await
            .expect("request should succeed")
            .expect("issue should exist");
        assert_eq!(issue.key, "TEST-123");
        assert_eq!(issue.fields.status.unwrap().name, "Open");
    }

    #[tokio::test]
    async fn get_issue_missing_maps_to_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/issue/NOPE-1"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let issue = test_client(&server)
            .get_issue("NOPE-1")
            .await
            .expect("404 is not a transport failure");
        assert!(issue.is_none());
    }

    #[tokio::test]
    async fn search_passes_jql_and_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/search"))
            .and(query_param("jql", "project=TEST"))
            .and(query_param("maxResults", "10"))
            .and(query_param("fields", "summary,status"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"issues": [issue_body("TEST-1", "Open")]})),
            )
            .mount(&server)
            .await;

        let issues = test_client(&server)
            .search(
                "project=TEST",
                10,
                &["summary".to_string(), "status".to_string()],
            )
            .await
            .expect("search should succeed");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].key, "TEST-1");
    }

    #[tokio::test]
    async fn apply_transition_bundles_comment() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/api/2/issue/TEST-123/transitions"))
            .and(body_json(json!({
                "transition": {"id": "2"},
                "update": {"comment": [{"add": {"body": "moving along"}}]}
            })))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        test_client(&server)
            .apply_transition("TEST-123", "2", Some("moving along"))
            .await
            .expect("transition should succeed");
    }

    #[tokio::test]
    async fn apply_transition_without_comment_omits_update() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/api/2/issue/TEST-123/transitions"))
            .and(body_json(json!({"transition": {"id": "3"}})))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        test_client(&server)
            .apply_transition("TEST-123", "3", None)
            .await
            .expect("transition should succeed");
    }

    #[tokio::test]
    async fn search_users_always_includes_active() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/user/search"))
            .and(query_param("query", "john"))
            .and(query_param("includeActive", "true"))
            .and(query_param("includeInactive", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "accountId": "user123",
                "displayName": "John Doe",
                "active": true
            }])))
            .mount(&server)
            .await;

        let users = test_client(&server)
            .search_users("john", 10, false)
            .await
            .expect("search should succeed");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].account_id, "user123");
    }

    #[tokio::test]
    async fn server_error_is_propagated_with_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/project"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .list_projects()
            .await
            .expect_err("500 should fail");
        match err {
            JiraApiError::Http { status, body } => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
