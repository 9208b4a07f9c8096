//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::OutputFormat;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get one application by ID
    #[command(visible_alias = "application")]
    App(AppArgs),
}

/// Arguments for 'get app'
#[derive(Parser, Debug)]
pub struct AppArgs {
    /// Application ID (e.g. 0oa1gjh63g214q0Hq0g4)
    pub app_id: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
