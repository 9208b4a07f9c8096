//! Group output formatter

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::escape_csv;
use crate::cli::OutputFormat;
use crate::okta::Group;

/// Serializable group for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableGroup {
    id: String,
    name: String,
    group_type: String,
    last_updated: String,
}

impl From<&Group> for SerializableGroup {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id.clone(),
            name: group.name().to_string(),
            group_type: group.group_type().to_string(),
            last_updated: group.last_updated().to_string(),
        }
    }
}

/// Output groups in the specified format
pub fn output_groups(groups: &[Group], format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => println!("{}", render_groups_table(groups, no_header)),
        OutputFormat::Csv => output_csv(groups, no_header),
        OutputFormat::Json => {
            let serializable: Vec<SerializableGroup> =
                groups.iter().map(SerializableGroup::from).collect();
            super::common::print_json(&serializable);
        }
        OutputFormat::Yaml => {
            let serializable: Vec<SerializableGroup> =
                groups.iter().map(SerializableGroup::from).collect();
            super::common::print_yaml(&serializable);
        }
    }
}

/// Render the group table: one header row plus one row per group
pub fn render_groups_table(groups: &[Group], no_header: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec!["ID", "NAME", "TYPE", "LAST UPDATED"]);
    }

    for group in groups {
        table.add_row(vec![
            group.id.as_str(),
            group.name(),
            group.group_type(),
            group.last_updated(),
        ]);
    }

    table.to_string()
}

fn output_csv(groups: &[Group], no_header: bool) {
    if !no_header {
        println!("ID,NAME,TYPE,LAST_UPDATED");
    }
    for group in groups {
        println!(
            "{},{},{},{}",
            escape_csv(&group.id),
            escape_csv(group.name()),
            escape_csv(group.group_type()),
            escape_csv(group.last_updated())
        );
    }
}
