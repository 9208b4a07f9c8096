//! CLI argument parsing

mod get;
mod list;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::defaults;

pub use get::{AppArgs, GetResource};
pub use list::{AppGroupsArgs, AppsArgs, GroupsArgs, ListResource, UsersArgs};

/// Serialization targets for the `-o` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Borderless text table (default)
    Table,
    /// RFC 4180 comma-separated values
    Csv,
    /// Pretty-printed JSON array
    Json,
    /// YAML document
    Yaml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

// clap's default_value_t renders the default through Display
impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Okta directory listing CLI
#[derive(Parser, Debug)]
#[command(name = "oktactl")]
#[command(version)]
#[command(about = "Explore Okta applications, groups and group memberships", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Okta org base URL (e.g. https://acme.okta.com)
    #[arg(long = "org-url", global = true)]
    pub org_url: Option<String>,

    /// API token (overrides env vars and config file)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Suppress the progress spinner
    #[arg(short = 'q', long, global = true, default_value_t = false)]
    pub quiet: bool,

    /// Omit header rows from table and CSV output
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List resources
    List {
        #[command(subcommand)]
        resource: ListResource,
    },
    /// Get a single resource
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },
}
