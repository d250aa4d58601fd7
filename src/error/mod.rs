//! Error types and handlers for Docker Hub API operations

pub mod handlers;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HubError>;

#[derive(Debug, Clone, Error)]
pub enum HubError {
    /// Missing credentials, bad base URL, unsupported output format
    #[error("Configuration error: {0}")]
    Config(String),
    /// Network related errors
    #[error("Network error: {0}")]
    Network(String),
    /// Undecodable or unexpectedly shaped responses
    #[error("Parse error: {0}")]
    Parse(String),
    /// Authentication errors
    #[error("Authentication error: {0}")]
    Auth(String),
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for HubError {
    fn from(err: serde_json::Error) -> Self {
        HubError::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for HubError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            HubError::Parse(err.to_string())
        } else {
            HubError::Network(err.to_string())
        }
    }
}

impl From<url::ParseError> for HubError {
    fn from(err: url::ParseError) -> Self {
        HubError::Validation(err.to_string())
    }
}
