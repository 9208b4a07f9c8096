//! Application group assignment output formatter
//!
//! The table view is a nested text listing rather than a flat table:
//! a summary line for the application, then per assignment its ID and
//! resolved name, its SAML role lines, and a single role line when set.

use serde::Serialize;

use super::common::escape_csv;
use crate::cli::OutputFormat;
use crate::okta::{App, GroupAssignment};

/// Serializable assignment for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableAssignment {
    id: String,
    name: String,
    saml_roles: Vec<String>,
    role: Option<String>,
}

impl From<&GroupAssignment> for SerializableAssignment {
    fn from(assignment: &GroupAssignment) -> Self {
        Self {
            id: assignment.id.clone(),
            name: assignment.name().to_string(),
            saml_roles: assignment.profile.saml_roles.clone(),
            role: assignment.profile.role.clone(),
        }
    }
}

/// Serializable wrapper pairing the application with its assignments
#[derive(Serialize)]
struct SerializableAppGroups {
    app_id: String,
    app_label: String,
    groups: Vec<SerializableAssignment>,
}

impl SerializableAppGroups {
    fn new(app: &App, groups: &[GroupAssignment]) -> Self {
        Self {
            app_id: app.id.clone(),
            app_label: app.display_label().to_string(),
            groups: groups.iter().map(SerializableAssignment::from).collect(),
        }
    }
}

/// Output app group assignments in the specified format
pub fn output_app_groups(
    app: &App,
    groups: &[GroupAssignment],
    format: &OutputFormat,
    no_header: bool,
) {
    match format {
        OutputFormat::Table => print!("{}", render_app_groups(app, groups)),
        OutputFormat::Csv => output_csv(groups, no_header),
        OutputFormat::Json => super::common::print_json(&SerializableAppGroups::new(app, groups)),
        OutputFormat::Yaml => super::common::print_yaml(&SerializableAppGroups::new(app, groups)),
    }
}

/// Render the nested assignment listing
///
/// One summary line naming the application and the group count, then per
/// assignment: one ID/name line, one line per SAML role, and one role
/// line only when the single role field is non-empty. An empty role list
/// contributes zero lines.
pub fn render_app_groups(app: &App, groups: &[GroupAssignment]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Group assignments for {} {} ({} groups)\n",
        app.id,
        app.display_label(),
        groups.len()
    ));

    for group in groups {
        out.push_str(&format!("{}  {}\n", group.id, group.name()));
        for role in &group.profile.saml_roles {
            out.push_str(&format!("{}\n", role));
        }
        if let Some(role) = group.profile.role.as_deref() {
            if !role.is_empty() {
                out.push_str(&format!("{}\n", role));
            }
        }
    }

    out
}

fn output_csv(groups: &[GroupAssignment], no_header: bool) {
    if !no_header {
        println!("GROUP_ID,NAME,SAML_ROLES,ROLE");
    }
    for group in groups {
        println!(
            "{},{},{},{}",
            escape_csv(&group.id),
            escape_csv(group.name()),
            escape_csv(&group.profile.saml_roles.join(";")),
            escape_csv(group.profile.role.as_deref().unwrap_or(""))
        );
    }
}
