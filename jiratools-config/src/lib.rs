//! # jiratools-config
//!
//! Connection configuration for jira-tools.
//!
//! The connection to the remote Jira instance is described entirely by three
//! environment variables:
//!
//! - `JIRA_SERVER` — base URL of the Jira instance
//! - `JIRA_EMAIL` — account email for basic auth
//! - `JIRA_API_TOKEN` — API token for basic auth
//!
//! All three are required. [`JiraConfig::from_env`] fails with
//! [`JiraToolsError::MissingConfiguration`] naming every absent variable, and
//! that failure is fatal before any operation runs.

#![warn(missing_docs)]

use figment::providers::Env;
use figment::Figment;
use serde::{Deserialize, Serialize};

use jiratools_common::{JiraToolsError, Result};

/// Environment variable prefix for all connection settings
const ENV_PREFIX: &str = "JIRA_";

/// Partially-loaded settings, prior to required-field validation
#[derive(Debug, Default, Deserialize, Serialize)]
struct RawJiraConfig {
    server: Option<String>,
    email: Option<String>,
    api_token: Option<String>,
}

/// Validated connection settings for the remote Jira instance
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JiraConfig {
    /// Base URL of the Jira instance, without a trailing slash
    pub server: String,
    /// Account email used for basic auth
    pub email: String,
    /// API token used for basic auth
    pub api_token: String,
}

impl JiraConfig {
    /// Load and validate connection settings from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`JiraToolsError::MissingConfiguration`] listing every missing
    /// variable when one or more of `JIRA_SERVER`, `JIRA_EMAIL`,
    /// `JIRA_API_TOKEN` is absent.
    pub fn from_env() -> Result<Self> {
        let raw: RawJiraConfig = Figment::new()
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| JiraToolsError::Remote {
                message: format!("failed to read environment: {e}"),
            })?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawJiraConfig) -> Result<Self> {
        let mut missing = Vec::new();
        if raw.server.as_deref().is_none_or(str::is_empty) {
            missing.push("JIRA_SERVER");
        }
        if raw.email.as_deref().is_none_or(str::is_empty) {
            missing.push("JIRA_EMAIL");
        }
        if raw.api_token.as_deref().is_none_or(str::is_empty) {
            missing.push("JIRA_API_TOKEN");
        }
        if !missing.is_empty() {
            return Err(JiraToolsError::MissingConfiguration {
                missing: missing.join(", "),
            });
        }

        let config = Self {
            server: raw
                .server
                .expect("validated above")
                .trim_end_matches('/')
                .to_string(),
            email: raw.email.expect("validated above"),
            api_token: raw.api_token.expect("validated above"),
        };
        tracing::debug!(server = %config.server, "loaded JIRA connection configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_complete_configuration() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("JIRA_SERVER", "https://jira.example.com/");
            jail.set_env("JIRA_EMAIL", "dev@example.com");
            jail.set_env("JIRA_API_TOKEN", "token-123");

            let config = JiraConfig::from_env().expect("config should load");
            // Trailing slash is stripped so browse URLs join cleanly.
            assert_eq!(config.server, "https://jira.example.com");
            assert_eq!(config.email, "dev@example.com");
            assert_eq!(config.api_token, "token-123");
            Ok(())
        });
    }

    #[test]
    fn missing_variables_are_all_named() {
        let err = JiraConfig::from_raw(RawJiraConfig {
            server: None,
            email: Some("dev@example.com".to_string()),
            api_token: None,
        })
        .expect_err("should fail");

        match err {
            JiraToolsError::MissingConfiguration { missing } => {
                assert!(missing.contains("JIRA_SERVER"));
                assert!(missing.contains("JIRA_API_TOKEN"));
                assert!(!missing.contains("JIRA_EMAIL"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_values_count_as_missing() {
        let err = JiraConfig::from_raw(RawJiraConfig {
            server: Some(String::new()),
            email: Some(String::new()),
            api_token: Some(String::new()),
        })
        .expect_err("should fail");
        assert!(err.to_string().contains("JIRA_SERVER"));
    }
}
