//! Output formatting module
//!
//! One formatter per entity, each supporting table, CSV, JSON and YAML.

mod app_groups;
mod apps;
mod common;
mod groups;
mod users;

pub use app_groups::{output_app_groups, render_app_groups};
pub use apps::{output_apps, render_apps_table};
pub use common::escape_csv;
pub use groups::{output_groups, render_groups_table};
pub use users::{output_users, render_users_table};
