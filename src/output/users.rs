//! User output formatter

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::escape_csv;
use crate::cli::OutputFormat;
use crate::okta::User;

/// Serializable user for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableUser {
    id: String,
    first_name: String,
    last_name: String,
    email: String,
}

impl From<&User> for SerializableUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            email: user.email().to_string(),
        }
    }
}

/// Output users in the specified format
pub fn output_users(users: &[User], format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => println!("{}", render_users_table(users, no_header)),
        OutputFormat::Csv => output_csv(users, no_header),
        OutputFormat::Json => {
            let serializable: Vec<SerializableUser> =
                users.iter().map(SerializableUser::from).collect();
            super::common::print_json(&serializable);
        }
        OutputFormat::Yaml => {
            let serializable: Vec<SerializableUser> =
                users.iter().map(SerializableUser::from).collect();
            super::common::print_yaml(&serializable);
        }
    }
}

/// Render the user table: one header row plus one row per user
pub fn render_users_table(users: &[User], no_header: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec!["ID", "FIRST NAME", "LAST NAME", "EMAIL"]);
    }

    for user in users {
        table.add_row(vec![
            user.id.as_str(),
            user.first_name(),
            user.last_name(),
            user.email(),
        ]);
    }

    table.to_string()
}

fn output_csv(users: &[User], no_header: bool) {
    if !no_header {
        println!("ID,FIRST_NAME,LAST_NAME,EMAIL");
    }
    for user in users {
        println!(
            "{},{},{},{}",
            escape_csv(&user.id),
            escape_csv(user.first_name()),
            escape_csv(user.last_name()),
            escape_csv(user.email())
        );
    }
}
