//! Application resources: search, single fetch, group assignments

mod api;
mod commands;
mod models;

pub use commands::{run_app_groups_command, run_apps_command, run_get_app_command};
pub use models::{App, GroupAssignment};
