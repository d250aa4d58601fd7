//! Mock Docker Hub server for client and CLI tests

#![allow(dead_code)]

use dockerhub_cli::{Credentials, HubClient, Logger};
use serde_json::{Value, json};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USERNAME: &str = "alice";
pub const PASSWORD: &str = "s3cret";
pub const ORG: &str = "acme";
pub const TOKEN: &str = "jwt-token";

/// Mock Docker Hub API rooted at `/v2`
pub struct MockHub {
    pub server: MockServer,
}

impl MockHub {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    pub fn api_url(&self) -> String {
        format!("{}/v2", self.server.uri())
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server.uri(), path)
    }

    pub fn client(&self) -> HubClient {
        HubClient::builder(credentials())
            .with_base_url(self.api_url())
            .with_logger(Logger::new_quiet())
            .build()
            .expect("client should build against the mock server")
    }

    /// Login endpoint handing out [`TOKEN`], expected `times` times
    pub async fn expect_login(&self, times: u64) {
        self.expect_login_response(json!({ "token": TOKEN }), times).await;
    }

    pub async fn expect_login_response(&self, body: Value, times: u64) {
        Mock::given(method("POST"))
            .and(path("/v2/users/login/"))
            .and(body_string_contains(format!("username={}", USERNAME)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}

pub fn credentials() -> Credentials {
    Credentials::new(USERNAME, PASSWORD, ORG).expect("test credentials are complete")
}

pub fn tags_page(results: Value, next: Option<String>) -> Value {
    json!({
        "count": results.as_array().map(|r| r.len()).unwrap_or(0),
        "next": next,
        "previous": null,
        "results": results,
    })
}
