//! oktactl - Explore Okta applications, groups and group memberships
//!
//! A read-only CLI for the Okta identity platform.
//!
//! # Features
//!
//! - Search applications by name or label prefix
//! - List group assignments for an application, with group names resolved
//! - Search groups by name prefix
//! - List users in a group
//! - Multiple output formats (table, CSV, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! # Search applications
//! oktactl list apps test
//!
//! # Show group assignments for an application
//! oktactl list app-groups 0oa1gjh63g214q0Hq0g4
//!
//! # Search groups by name prefix
//! oktactl list groups eng
//!
//! # List users in a group
//! oktactl list users 00g1hqieohhlPBv581d8
//!
//! # Output as JSON
//! oktactl list groups eng -o json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod okta;
pub mod output;
pub mod ui;

pub use cli::{
    AppArgs, AppGroupsArgs, AppsArgs, Cli, Command, GetResource, GroupsArgs, ListResource,
    OutputFormat, UsersArgs,
};
pub use error::{OktaError, Result};
pub use okta::{
    run_app_groups_command, run_apps_command, run_get_app_command, run_groups_command,
    run_users_command, App, Group, GroupAssignment, OktaClient, OktaService, OrgResolver, Profile,
    TokenResolver, User,
};
pub use output::{
    output_app_groups, output_apps, output_groups, output_users, render_app_groups,
    render_apps_table, render_groups_table, render_users_table,
};
