//! Authentication module for the Docker Hub management API
//!
//! Docker Hub exchanges a username/password pair for a JWT at
//! `POST /v2/users/login/`. The token is then sent as a bearer token on every
//! other call made by the same client instance.

use crate::config::Credentials;
use crate::error::handlers::HttpErrorHandler;
use crate::error::Result;
use crate::logging::Logger;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const LOGIN_ENDPOINT: &str = "users/login/";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Bearer token state of a single client instance.
///
/// Authenticated iff a non-empty token is held. There is no expiry tracking and
/// no refresh; a fresh client always starts unauthenticated.
#[derive(Debug, Default, Clone)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Replace the held token; empty tokens leave the session unauthenticated
    pub fn store(&mut self, token: Option<String>) {
        self.token = token.filter(|t| !t.is_empty());
    }
}

#[derive(Debug, Clone)]
pub struct Auth {
    client: Client,
    login_url: String,
}

impl Auth {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            login_url: format!("{}/{}", base_url.trim_end_matches('/'), LOGIN_ENDPOINT),
        }
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    /// Exchange credentials for a token.
    ///
    /// Returns `Ok(None)` when the service answers without a token; only transport
    /// and decoding failures are errors.
    pub async fn login(&self, credentials: &Credentials, output: &Logger) -> Result<Option<String>> {
        output.verbose(&format!(
            "Attempting authentication for user: {}",
            credentials.username()
        ));
        output.detail(&format!("POST {}", self.login_url));

        let response = self
            .client
            .post(&self.login_url)
            .form(&LoginRequest {
                username: credentials.username(),
                password: credentials.password(),
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        output.detail(&format!("Login response status: {}", status));

        if !status.is_success() {
            output.warning(&HttpErrorHandler::describe_login(status, &body));
        }

        let token_response: TokenResponse = serde_json::from_str(&body)?;
        let token = token_response.token.filter(|t| !t.is_empty());

        match &token {
            Some(token) => output.detail(&format!("Token obtained (length: {} chars)", token.len())),
            None => output.warning("Login response did not contain a token"),
        }

        Ok(token)
    }
}
