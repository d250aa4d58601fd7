// Docker Hub API client: owns the HTTP client, the organization credentials
// and the lazily acquired session token. Domain operations live in
// `registry::operations` and all go through `HubClient::request`.

use crate::config::{ApiConfig, Credentials};
use crate::error::handlers::HttpErrorHandler;
use crate::error::{HubError, Result};
use crate::logging::Logger;
use crate::registry::auth::{Auth, Session};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// HTTP verbs used by the management API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestMethod::Get => write!(f, "GET"),
            RequestMethod::Post => write!(f, "POST"),
        }
    }
}

pub struct HubClientBuilder {
    credentials: Credentials,
    api_config: ApiConfig,
    output: Logger,
}

impl HubClientBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            api_config: ApiConfig::default(),
            output: Logger::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_config = ApiConfig::new(base_url);
        self
    }

    pub fn with_api_config(mut self, api_config: ApiConfig) -> Self {
        self.api_config = api_config;
        self
    }

    pub fn with_logger(mut self, output: Logger) -> Self {
        self.output = output;
        self
    }

    pub fn build(self) -> Result<HubClient> {
        self.api_config.validate()?;

        let client = Client::builder().build()?;
        let base_url = self.api_config.base_url.trim_end_matches('/').to_string();
        let auth = Auth::new(client.clone(), &base_url);

        Ok(HubClient {
            client,
            base_url,
            credentials: self.credentials,
            auth,
            session: Session::default(),
            output: self.output,
        })
    }
}

pub struct HubClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
    auth: Auth,
    session: Session,
    pub(crate) output: Logger,
}

impl HubClient {
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    pub fn builder(credentials: Credentials) -> HubClientBuilder {
        HubClientBuilder::new(credentials)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn organization(&self) -> &str {
        self.credentials.organization()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Exchange the credentials for a session token.
    ///
    /// A response without a token leaves the session unauthenticated and is not
    /// an error here; the request guard reports it.
    pub async fn login(&mut self) -> Result<()> {
        let token = self.auth.login(&self.credentials, &self.output).await?;
        self.session.store(token);
        if self.session.is_authenticated() {
            self.output.verbose("Authentication successful");
        }
        Ok(())
    }

    /// Log in once if no token is held, and hand back the token to use.
    async fn ensure_authenticated(&mut self) -> Result<String> {
        if !self.session.is_authenticated() {
            self.login().await?;
        }

        self.session.token().map(str::to_string).ok_or_else(|| {
            HubError::Auth(format!(
                "Login as {} did not return a token",
                self.credentials.username()
            ))
        })
    }

    /// Issue an authenticated call and decode its JSON body.
    ///
    /// GET params become the query string, POST params the JSON body. Non-success
    /// statuses are logged but the body is still decoded and returned; an empty
    /// body decodes to `Value::Null`.
    pub async fn request<P>(&mut self, method: RequestMethod, endpoint: &str, params: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        let token = self.ensure_authenticated().await?;
        let url = self.endpoint_url(endpoint);
        self.output.detail(&format!("{} {}", method, url));

        let request = match method {
            RequestMethod::Get => self.client.get(&url),
            RequestMethod::Post => self.client.post(&url),
        }
        .bearer_auth(&token)
        .header(CONTENT_TYPE, "application/json");

        let request = match method {
            RequestMethod::Get => request.query(params),
            RequestMethod::Post => request.json(params),
        };

        let response = request.send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            self.output
                .warning(&HttpErrorHandler::describe(status, &format!("{} {}", method, endpoint), &body));
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&body)?)
    }

    pub async fn get<P>(&mut self, endpoint: &str, params: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        self.request(RequestMethod::Get, endpoint, params).await
    }

    pub async fn post<P>(&mut self, endpoint: &str, data: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        self.request(RequestMethod::Post, endpoint, data).await
    }
}
