//! Configuration management: credentials and API endpoint resolution

use crate::error::{HubError, Result};
use std::fmt;

pub const USERNAME_ENV: &str = "DOCKERHUB_USERNAME";
pub const PASSWORD_ENV: &str = "DOCKERHUB_PASSWORD";
pub const ORG_ENV: &str = "DOCKERHUB_ORG";
pub const API_URL_ENV: &str = "DOCKERHUB_API_URL";

pub const DEFAULT_API_URL: &str = "https://hub.docker.com/v2";

/// Source of `DOCKERHUB_*` values when no explicit value is given
pub type EnvLookup = fn(&str) -> Option<String>;

/// Reads the process environment
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Username, password and organization used to talk to Docker Hub.
///
/// A value of this type is always complete: every constructor rejects empty
/// fields, so a client can never be built from partial credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
    organization: String,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        organization: impl Into<String>,
    ) -> Result<Self> {
        Self::resolve_with(
            Some(username.into()),
            Some(password.into()),
            Some(organization.into()),
            |_| None,
        )
    }

    /// Resolve credentials from explicit values, falling back to the
    /// `DOCKERHUB_*` environment variables.
    pub fn resolve(
        username: Option<String>,
        password: Option<String>,
        organization: Option<String>,
    ) -> Result<Self> {
        Self::resolve_with(username, password, organization, process_env)
    }

    /// Same as [`Credentials::resolve`] with a custom variable lookup.
    pub fn resolve_with<F>(
        username: Option<String>,
        password: Option<String>,
        organization: Option<String>,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |explicit: Option<String>, key: &str| {
            explicit
                .filter(|value| !value.is_empty())
                .or_else(|| lookup(key).filter(|value| !value.is_empty()))
        };

        let username = pick(username, USERNAME_ENV);
        let password = pick(password, PASSWORD_ENV);
        let organization = pick(organization, ORG_ENV);

        let missing: Vec<&str> = [
            ("username", username.is_none()),
            ("password", password.is_none()),
            ("organization", organization.is_none()),
        ]
        .iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| *name)
        .collect();

        match (username, password, organization) {
            (Some(username), Some(password), Some(organization)) => Ok(Self {
                username,
                password,
                organization,
            }),
            _ => Err(HubError::Config(format!(
                "Missing credentials: {}",
                missing.join(", ")
            ))),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("organization", &self.organization)
            .finish()
    }
}

/// Location of the versioned management API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Explicit URL first, then `DOCKERHUB_API_URL`, then the public Docker Hub API
    pub fn from_env(explicit: Option<String>) -> Self {
        Self::from_env_with(explicit, process_env)
    }

    /// Same as [`ApiConfig::from_env`] with a custom variable lookup.
    pub fn from_env_with<F>(explicit: Option<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = explicit
            .filter(|url| !url.is_empty())
            .or_else(|| lookup(API_URL_ENV).filter(|url| !url.is_empty()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { base_url }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(HubError::Config("API base URL cannot be empty".to_string()));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(HubError::Config(format!(
                "Invalid API base URL: {}. Must start with http:// or https://",
                self.base_url
            )));
        }

        url::Url::parse(&self.base_url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_resolve_from_environment() {
        let vars = env(&[
            (USERNAME_ENV, "alice"),
            (PASSWORD_ENV, "s3cret"),
            (ORG_ENV, "acme"),
        ]);
        let creds = Credentials::resolve_with(None, None, None, |k| vars.get(k).cloned()).unwrap();
        assert_eq!(creds.username(), "alice");
        assert_eq!(creds.password(), "s3cret");
        assert_eq!(creds.organization(), "acme");
    }

    #[test]
    fn test_explicit_values_win_over_environment() {
        let vars = env(&[
            (USERNAME_ENV, "alice"),
            (PASSWORD_ENV, "s3cret"),
            (ORG_ENV, "acme"),
        ]);
        let creds = Credentials::resolve_with(
            Some("bob".to_string()),
            None,
            Some("other".to_string()),
            |k| vars.get(k).cloned(),
        )
        .unwrap();
        assert_eq!(creds.username(), "bob");
        assert_eq!(creds.password(), "s3cret");
        assert_eq!(creds.organization(), "other");
    }

    #[test]
    fn test_any_missing_field_fails() {
        let complete = [
            (USERNAME_ENV, "alice"),
            (PASSWORD_ENV, "s3cret"),
            (ORG_ENV, "acme"),
        ];
        for skip in 0..complete.len() {
            let partial: Vec<_> = complete
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, pair)| *pair)
                .collect();
            let vars = env(&partial);
            let result = Credentials::resolve_with(None, None, None, |k| vars.get(k).cloned());
            assert!(matches!(result, Err(HubError::Config(_))), "skip {}", skip);
        }
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let vars = env(&[(USERNAME_ENV, ""), (PASSWORD_ENV, "s3cret"), (ORG_ENV, "acme")]);
        let err = Credentials::resolve_with(Some(String::new()), None, None, |k| {
            vars.get(k).cloned()
        })
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing credentials: username"
        );
    }

    #[test]
    fn test_new_rejects_empty_organization() {
        assert!(Credentials::new("alice", "s3cret", "").is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("alice", "s3cret", "acme").unwrap();
        let rendered = format!("{:?}", creds);
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("alice"));
    }

    #[test]
    fn test_api_config_validation() {
        assert!(ApiConfig::default().validate().is_ok());
        assert!(ApiConfig::new("http://127.0.0.1:8080/v2").validate().is_ok());
        assert!(ApiConfig::new("").validate().is_err());
        assert!(ApiConfig::new("hub.docker.com/v2").validate().is_err());
    }

    #[test]
    fn test_api_config_prefers_explicit_url() {
        let config = ApiConfig::from_env(Some("http://localhost:9000/v2".to_string()));
        assert_eq!(config.base_url, "http://localhost:9000/v2");
    }

    #[test]
    fn test_api_config_lookup_fallbacks() {
        let vars = env(&[(API_URL_ENV, "http://mirror.local/v2")]);
        let config = ApiConfig::from_env_with(None, |k| vars.get(k).cloned());
        assert_eq!(config.base_url, "http://mirror.local/v2");

        let config = ApiConfig::from_env_with(Some(String::new()), |_| Some(String::new()));
        assert_eq!(config.base_url, DEFAULT_API_URL);
    }
}
