//! Repository operations for the Docker Hub client
//!
//! - Repository creation (POST /v2/repositories/)
//! - Repository listing (GET /v2/repositories/{org})
//! - Team permission assignment (POST /v2/repositories/{org}/{repo}/groups/)

use crate::error::Result;
use crate::registry::client::HubClient;
use crate::registry::pagination::Page;
use serde::{Deserialize, Serialize};

pub const DEFAULT_REPOSITORY_PAGE_SIZE: u32 = 25;
pub const DEFAULT_ORDERING: &str = "last_updated";

#[derive(Debug, Serialize)]
struct CreateRepositoryRequest<'a> {
    is_private: bool,
    name: &'a str,
    namespace: &'a str,
}

#[derive(Debug, Serialize)]
struct RepositoryListQuery<'a> {
    page_size: u32,
    ordering: &'a str,
}

#[derive(Debug, Serialize)]
struct SetPermissionRequest<'a> {
    group_id: Option<u64>,
    permission: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
}

impl HubClient {
    /// Create a repository in the organization.
    ///
    /// Docker Hub echoes `{"<name>": "<name>"}` on success; anything else
    /// (error payloads, silent no-ops) yields `false`.
    pub async fn create_repository(&mut self, name: &str, private: bool) -> Result<bool> {
        let namespace = self.organization().to_string();
        self.output.verbose(&format!(
            "Creating {} repository {}/{}",
            if private { "private" } else { "public" },
            namespace,
            name
        ));

        let response = self
            .post(
                "repositories/",
                &CreateRepositoryRequest {
                    is_private: private,
                    name,
                    namespace: &namespace,
                },
            )
            .await?;

        Ok(response.get(name).and_then(|v| v.as_str()) == Some(name))
    }

    /// Names of the organization's repositories from a single page
    pub async fn get_repositories(&mut self, page_size: u32, ordering: &str) -> Result<Vec<String>> {
        let endpoint = format!("repositories/{}", self.organization());
        let response = self
            .get(&endpoint, &RepositoryListQuery { page_size, ordering })
            .await?;

        let page: Page<RepositorySummary> = Page::from_value(response, "repository listing")?;
        self.output
            .verbose(&format!("Found {} repositories", page.results.len()));

        Ok(page.results.into_iter().map(|repo| repo.name).collect())
    }

    /// Grant a team a permission on a repository.
    ///
    /// An unknown team (`None`) is sent as `"group_id": null`; the server decides.
    pub async fn set_permissions(
        &mut self,
        repository: &str,
        group_id: Option<u64>,
        permission: &str,
    ) -> Result<()> {
        let endpoint = format!("repositories/{}/{}/groups/", self.organization(), repository);
        self.post(&endpoint, &SetPermissionRequest { group_id, permission })
            .await?;
        Ok(())
    }
}
