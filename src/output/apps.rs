//! Application output formatter

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::escape_csv;
use crate::cli::OutputFormat;
use crate::okta::App;

/// Serializable application for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableApp {
    id: String,
    label: String,
    name: String,
}

impl From<&App> for SerializableApp {
    fn from(app: &App) -> Self {
        Self {
            id: app.id.clone(),
            label: app.display_label().to_string(),
            name: app.name.clone(),
        }
    }
}

/// Output applications in the specified format
pub fn output_apps(apps: &[App], format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => println!("{}", render_apps_table(apps, no_header)),
        OutputFormat::Csv => output_csv(apps, no_header),
        OutputFormat::Json => {
            let serializable: Vec<SerializableApp> = apps.iter().map(SerializableApp::from).collect();
            super::common::print_json(&serializable);
        }
        OutputFormat::Yaml => {
            let serializable: Vec<SerializableApp> = apps.iter().map(SerializableApp::from).collect();
            super::common::print_yaml(&serializable);
        }
    }
}

/// Render the application table: one header row plus one row per app
pub fn render_apps_table(apps: &[App], no_header: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec!["ID", "LABEL", "NAME"]);
    }

    for app in apps {
        table.add_row(vec![app.id.as_str(), app.display_label(), app.name.as_str()]);
    }

    table.to_string()
}

fn output_csv(apps: &[App], no_header: bool) {
    if !no_header {
        println!("ID,LABEL,NAME");
    }
    for app in apps {
        println!(
            "{},{},{}",
            escape_csv(&app.id),
            escape_csv(app.display_label()),
            escape_csv(&app.name)
        );
    }
}
