//! Command-line argument parsing

use crate::output::{DEFAULT_SEPARATOR, OutputFormat, OutputFormatter};
use crate::registry::operations::{DEFAULT_ORDERING, DEFAULT_REPOSITORY_PAGE_SIZE};
use crate::registry::operations::tag_operations::DEFAULT_TAG_PAGE_SIZE;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "dockerhub-cli")]
#[command(about = "Manage Docker Hub repositories, team permissions and tags")]
#[command(version)]
pub struct Args {
    /// Docker Hub username
    #[arg(
        long = "username",
        short = 'u',
        global = true,
        help = "Docker Hub username [env: DOCKERHUB_USERNAME]"
    )]
    pub username: Option<String>,

    /// Docker Hub password or access token
    #[arg(
        long = "password",
        short = 'p',
        global = true,
        help = "Docker Hub password or personal access token [env: DOCKERHUB_PASSWORD]"
    )]
    pub password: Option<String>,

    /// Organization (namespace)
    #[arg(
        long = "org",
        global = true,
        help = "Organization owning the repositories and teams [env: DOCKERHUB_ORG]"
    )]
    pub organization: Option<String>,

    /// API base URL
    #[arg(
        long = "api-url",
        global = true,
        help = "Management API base URL [env: DOCKERHUB_API_URL] [default: https://hub.docker.com/v2]"
    )]
    pub api_url: Option<String>,

    /// Verbose output
    #[arg(
        long = "verbose",
        short = 'v',
        global = true,
        conflicts_with = "quiet",
        help = "Enable verbose output"
    )]
    pub verbose: bool,

    /// Quiet output
    #[arg(
        long = "quiet",
        short = 'q',
        global = true,
        help = "Only print results and errors"
    )]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Repositories
    #[command(subcommand)]
    Repo(RepoCommand),
}

#[derive(Subcommand, Debug)]
pub enum RepoCommand {
    /// Create a repository, optionally granting a team access to it
    Create {
        /// Repository name
        name: String,

        #[arg(long = "private", help = "Create the repository as private")]
        private: bool,

        #[arg(
            long = "team",
            short = 't',
            num_args = 2,
            value_names = ["TEAM", "PERMISSION"],
            help = "Grant TEAM the given PERMISSION (read, write, admin)"
        )]
        team: Option<Vec<String>>,
    },

    /// List repositories of the organization
    List {
        #[command(flatten)]
        format: FormatArgs,

        #[arg(long = "page-size", default_value_t = DEFAULT_REPOSITORY_PAGE_SIZE)]
        page_size: u32,

        #[arg(long = "ordering", default_value = DEFAULT_ORDERING)]
        ordering: String,
    },

    /// List tags of a repository
    Tags {
        /// Repository name
        repository: String,

        #[command(flatten)]
        format: FormatArgs,

        #[arg(
            long = "field",
            short = 'f',
            help = "Tag field to print, repeatable (e.g. -f name -f full_size) [default: name]"
        )]
        fields: Vec<String>,

        #[arg(
            long = "page",
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "First page to fetch"
        )]
        page: u32,

        #[arg(long = "page-size", default_value_t = DEFAULT_TAG_PAGE_SIZE)]
        page_size: u32,

        #[arg(long = "ordering", default_value = DEFAULT_ORDERING)]
        ordering: String,

        #[arg(long = "no-follow", help = "Only fetch the first page")]
        no_follow: bool,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct FormatArgs {
    #[arg(
        long = "output",
        short = 'o',
        default_value = "text",
        help = "Output format: text, json"
    )]
    pub output: OutputFormat,

    #[arg(
        long = "separator",
        short = 's',
        default_value = DEFAULT_SEPARATOR,
        help = "Separator for text output"
    )]
    pub separator: String,
}

impl FormatArgs {
    pub fn formatter(&self) -> OutputFormatter {
        OutputFormatter::new(self.output, self.separator.clone())
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
