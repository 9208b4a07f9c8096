//! Group resources: search, single fetch, member listing

mod api;
mod commands;
mod models;

pub use commands::{run_groups_command, run_users_command};
pub use models::{Group, User};
