//! Group (team) lookups for the Docker Hub client

use crate::error::Result;
use crate::registry::client::HubClient;
use crate::registry::pagination::Page;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_GROUP_PAGE_SIZE: u32 = 25;

#[derive(Debug, Serialize)]
struct GroupListQuery {
    page: u32,
    page_size: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Group {
    pub name: String,
    pub id: u64,
}

impl HubClient {
    /// One page of the organization's groups as name → id.
    /// Duplicate names resolve to the last one listed.
    pub async fn get_groups(&mut self, page: u32, page_size: u32) -> Result<HashMap<String, u64>> {
        let endpoint = format!("orgs/{}/groups", self.organization());
        let response = self
            .get(&endpoint, &GroupListQuery { page, page_size })
            .await?;

        let page: Page<Group> = Page::from_value(response, "group listing")?;
        Ok(page
            .results
            .into_iter()
            .map(|group| (group.name, group.id))
            .collect())
    }

    /// Exact, case-sensitive lookup on the first page of groups
    pub async fn get_group_by_name(&mut self, name: &str) -> Result<Option<u64>> {
        let groups = self.get_groups(1, DEFAULT_GROUP_PAGE_SIZE).await?;
        let id = groups.get(name).copied();

        match id {
            Some(id) => self.output.detail(&format!("Team {} has id {}", name, id)),
            None => self
                .output
                .detail(&format!("Team {} not found in {}", name, self.organization())),
        }

        Ok(id)
    }
}
