//! Command runner: resolves credentials, builds the client and dispatches

use crate::cli::args::{Args, Command, RepoCommand};
use crate::config::{ApiConfig, Credentials, EnvLookup, process_env};
use crate::error::Result;
use crate::logging::Logger;
use crate::registry::operations::{DEFAULT_ORDERING, DEFAULT_REPOSITORY_PAGE_SIZE};
use crate::registry::{HubClient, TagQuery};

pub struct Runner {
    args: Args,
    output: Logger,
    env: EnvLookup,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        let output = if args.quiet {
            Logger::new_quiet()
        } else {
            Logger::new(args.verbose)
        };

        Self {
            args,
            output,
            env: process_env,
        }
    }

    /// Resolve missing flags through `env` instead of the process environment
    pub fn with_env_lookup(mut self, env: EnvLookup) -> Self {
        self.env = env;
        self
    }

    pub fn logger(&self) -> &Logger {
        &self.output
    }

    /// Run the command and print its result on stdout
    pub async fn run(&self) -> Result<()> {
        if let Some(content) = self.execute().await? {
            println!("{}", content);
        }
        Ok(())
    }

    /// Run the command and return what should be printed, if anything
    pub async fn execute(&self) -> Result<Option<String>> {
        let Command::Repo(command) = &self.args.command;

        // Credentials are checked before anything touches the network
        let mut client = self.create_client()?;

        let content = match command {
            RepoCommand::Create { name, private, team } => {
                self.create_repository(&mut client, name, *private, team.as_deref())
                    .await?;
                None
            }
            RepoCommand::List {
                format,
                page_size,
                ordering,
            } => {
                self.output.section("Repositories");
                let names = client.get_repositories(*page_size, ordering).await?;
                Some(format.formatter().render_names(&names)?)
            }
            RepoCommand::Tags {
                repository,
                format,
                fields,
                page,
                page_size,
                ordering,
                no_follow,
            } => {
                self.output.section(&format!("Tags of {}/{}", client.organization(), repository));
                let query = TagQuery::new()
                    .with_page(*page)
                    .with_page_size(*page_size)
                    .with_ordering(ordering.as_str())
                    .with_follow(!*no_follow)
                    .with_fields(fields.iter().cloned());
                let projection = client.get_tags(repository, &query).await?;
                Some(format.formatter().render_projection(&projection)?)
            }
        };

        self.output
            .verbose(&format!("Completed in {}", self.output.elapsed_time()));
        Ok(content)
    }

    fn create_client(&self) -> Result<HubClient> {
        let credentials = Credentials::resolve_with(
            self.args.username.clone(),
            self.args.password.clone(),
            self.args.organization.clone(),
            self.env,
        )?;
        let api_config = ApiConfig::from_env_with(self.args.api_url.clone(), self.env);
        self.output.detail(&format!("API: {}", api_config.base_url));

        HubClient::builder(credentials)
            .with_api_config(api_config)
            .with_logger(self.output.clone())
            .build()
    }

    async fn create_repository(
        &self,
        client: &mut HubClient,
        name: &str,
        private: bool,
        team: Option<&[String]>,
    ) -> Result<()> {
        self.output.section(&format!("Create {}/{}", client.organization(), name));

        let existing = client
            .get_repositories(DEFAULT_REPOSITORY_PAGE_SIZE, DEFAULT_ORDERING)
            .await?;

        if existing.iter().any(|repo| repo == name) {
            self.output
                .info("Skipping creation, repository already exists.");
        } else if client.create_repository(name, private).await? {
            self.output.success(&format!(
                "Created {} repository {}/{}",
                if private { "private" } else { "public" },
                client.organization(),
                name
            ));
        } else {
            self.output.warning(&format!(
                "Docker Hub did not confirm creation of {}/{}",
                client.organization(),
                name
            ));
        }

        if let Some([team, permission]) = team {
            let group_id = client.get_group_by_name(team).await?;
            if group_id.is_none() {
                self.output.warning(&format!(
                    "Team {} not found in {}, sending the request anyway",
                    team,
                    client.organization()
                ));
            }

            self.output
                .info(&format!("Add team {} with {} permission.", team, permission));
            client.set_permissions(name, group_id, permission).await?;
        }

        Ok(())
    }
}
