//! Docker Hub operations, grouped by resource
//!
//! Each file adds methods to [`HubClient`](crate::registry::HubClient); every
//! call goes through its authenticated `request` guard.

pub mod group_operations;
pub mod repository_operations;
pub mod tag_operations;

pub use repository_operations::{DEFAULT_ORDERING, DEFAULT_REPOSITORY_PAGE_SIZE};
pub use tag_operations::TagQuery;
