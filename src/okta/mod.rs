//! Okta API client module
//!
//! This module provides functionality to interact with the Okta API.

pub mod apps;
mod client;
mod credentials;
pub mod groups;
mod host;
pub mod models;
mod service;

pub use apps::{
    run_app_groups_command, run_apps_command, run_get_app_command, App, GroupAssignment,
};
pub use client::OktaClient;
pub use credentials::TokenResolver;
pub use groups::{run_groups_command, run_users_command, Group, User};
pub use host::OrgResolver;
pub use models::Profile;
pub use service::OktaService;
