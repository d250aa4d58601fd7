//! Tag listing for the Docker Hub client
//!
//! Walks `GET /v2/repositories/{org}/{repo}/tags` page by page following the
//! `next` cursor, then projects the collected records onto the requested fields.

use crate::error::Result;
use crate::registry::client::HubClient;
use crate::registry::operations::repository_operations::DEFAULT_ORDERING;
use crate::registry::pagination::{Page, PageCursor};
use crate::registry::projection::Projection;
use serde::Serialize;
use serde_json::{Map, Value};

pub const DEFAULT_TAG_PAGE_SIZE: u32 = 100;
pub const DEFAULT_TAG_FIELD: &str = "name";

/// Parameters of a tag listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagQuery {
    pub page: u32,
    pub page_size: u32,
    pub ordering: String,
    pub follow: bool,
    fields: Vec<String>,
}

impl Default for TagQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_TAG_PAGE_SIZE,
            ordering: DEFAULT_ORDERING.to_string(),
            follow: true,
            fields: vec![DEFAULT_TAG_FIELD.to_string()],
        }
    }
}

impl TagQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_ordering(mut self, ordering: impl Into<String>) -> Self {
        self.ordering = ordering.into();
        self
    }

    pub fn with_follow(mut self, follow: bool) -> Self {
        self.follow = follow;
        self
    }

    /// An empty list keeps the default `name` field
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if !fields.is_empty() {
            self.fields = fields;
        }
        self
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

#[derive(Debug, Serialize)]
struct TagPageQuery<'a> {
    page: u32,
    page_size: u32,
    ordering: &'a str,
}

impl HubClient {
    /// List a repository's tags projected onto `query.fields()`
    pub async fn get_tags(&mut self, repository: &str, query: &TagQuery) -> Result<Projection> {
        let records = self.fetch_tag_records(repository, query).await?;
        Ok(Projection::project(records, query.fields()))
    }

    /// Raw tag records in page order, then server order within a page.
    ///
    /// With `follow` unset exactly one page is fetched. Otherwise pages are fetched
    /// until the cursor is exhausted; there is no upper bound, so a server whose
    /// cursor loops back never terminates the walk. Any failing page aborts the
    /// whole listing.
    pub async fn fetch_tag_records(
        &mut self,
        repository: &str,
        query: &TagQuery,
    ) -> Result<Vec<Map<String, Value>>> {
        let endpoint = format!("repositories/{}/{}/tags", self.organization(), repository);
        let mut records = Vec::new();
        let mut cursor = PageCursor::from_page(query.page);
        let mut pages_fetched = 0usize;

        while let PageCursor::Next(page) = cursor {
            let response = self
                .get(
                    &endpoint,
                    &TagPageQuery {
                        page,
                        page_size: query.page_size,
                        ordering: &query.ordering,
                    },
                )
                .await?;

            let tag_page: Page<Map<String, Value>> = Page::from_value(response, "tag listing")?;
            pages_fetched += 1;
            cursor = tag_page.cursor();

            self.output.detail(&format!(
                "Page {} of {}: {} tags, next: {}",
                page,
                repository,
                tag_page.results.len(),
                cursor
                    .page()
                    .map_or_else(|| "none".to_string(), |n| n.to_string())
            ));
            records.extend(tag_page.results);

            if !query.follow {
                break;
            }
        }

        self.output.verbose(&format!(
            "Collected {} tags for {} from {} page(s)",
            records.len(),
            repository,
            pages_fetched
        ));

        Ok(records)
    }
}
