//! Page envelopes and cursor handling for paginated listings
//!
//! Docker Hub list endpoints answer with `{"count": .., "next": <url|null>,
//! "previous": .., "results": [..]}`. The only thing the walker needs from `next`
//! is its `page` query parameter.

use crate::error::{HubError, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// One page of a listing
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
}

impl<T: DeserializeOwned> Page<T> {
    /// Decode a response body, naming the operation in the error
    pub fn from_value(value: Value, operation: &str) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| HubError::Parse(format!("Unexpected {} response: {}", operation, e)))
    }
}

impl<T> Page<T> {
    pub fn cursor(&self) -> PageCursor {
        PageCursor::from_next(self.next.as_deref())
    }
}

/// Where a listing continues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCursor {
    Next(u32),
    Exhausted,
}

impl PageCursor {
    /// Page numbers start at 1; page 0 means there is nothing to fetch
    pub fn from_page(page: u32) -> Self {
        if page == 0 {
            PageCursor::Exhausted
        } else {
            PageCursor::Next(page)
        }
    }

    /// Extract the page number from a `next` URL, absolute or relative.
    /// Anything without a usable positive `page` parameter ends the listing.
    pub fn from_next(next: Option<&str>) -> Self {
        let Some(next) = next.filter(|n| !n.trim().is_empty()) else {
            return PageCursor::Exhausted;
        };

        // join() also accepts absolute URLs, so relative cursors need no special case
        let parsed = Url::parse("http://cursor.invalid/").and_then(|base| base.join(next));
        let Ok(url) = parsed else {
            return PageCursor::Exhausted;
        };

        url.query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse::<u32>().ok())
            .map(PageCursor::from_page)
            .unwrap_or(PageCursor::Exhausted)
    }

    pub fn page(&self) -> Option<u32> {
        match self {
            PageCursor::Next(page) => Some(*page),
            PageCursor::Exhausted => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, PageCursor::Exhausted)
    }
}
