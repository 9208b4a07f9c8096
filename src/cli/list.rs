//! List command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::OutputFormat;

/// Resource types for the 'list' command
#[derive(Subcommand, Debug)]
pub enum ListResource {
    /// Search applications by name or label prefix
    #[command(visible_alias = "app", visible_alias = "applications")]
    Apps(AppsArgs),

    /// List groups assigned to an application
    #[command(visible_alias = "app-group", visible_alias = "appgroups")]
    AppGroups(AppGroupsArgs),

    /// Search groups by name prefix
    #[command(visible_alias = "group")]
    Groups(GroupsArgs),

    /// List users in a group
    #[command(visible_alias = "user")]
    Users(UsersArgs),
}

/// Arguments for 'list apps'
#[derive(Parser, Debug)]
pub struct AppsArgs {
    /// Name or label prefix to search for (startsWith semantics)
    pub query: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'list app-groups'
#[derive(Parser, Debug)]
pub struct AppGroupsArgs {
    /// Application ID (e.g. 0oa1gjh63g214q0Hq0g4)
    pub app_id: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'list groups'
#[derive(Parser, Debug)]
pub struct GroupsArgs {
    /// Group name prefix to search for (startsWith semantics)
    pub query: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'list users'
#[derive(Parser, Debug)]
pub struct UsersArgs {
    /// Group ID (e.g. 00g1hqieohhlPBv581d8)
    pub group_id: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
