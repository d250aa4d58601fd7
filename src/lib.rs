//! Docker Hub CLI Library
//!
//! This file serves as the library root for the dockerhub-cli crate,
//! organizing and exposing the modules that make up the application.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod registry;

pub use config::{ApiConfig, Credentials};
pub use error::{HubError, Result};
pub use logging::Logger;
pub use registry::{HubClient, HubClientBuilder, PageCursor, Projection, TagQuery};
