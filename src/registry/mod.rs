//! Registry module for Docker Hub management API interactions
//!
//! This module provides authentication and client logic for the Docker Hub `v2`
//! management API: lazy login, repository and team management, and paginated
//! tag listings with field projection.

pub mod auth;
pub mod client;
pub mod operations;
pub mod pagination;
pub mod projection;

pub use auth::{Auth, Session};
pub use client::{HubClient, HubClientBuilder, RequestMethod};
pub use operations::TagQuery;
pub use pagination::{Page, PageCursor};
pub use projection::Projection;
