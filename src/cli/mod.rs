//! Command line interface module
//!
//! Argument parsing and the runner that turns a parsed command into Docker Hub
//! API calls and rendered output.

pub mod args;
pub mod runner;

pub use args::Args;
pub use runner::Runner;
