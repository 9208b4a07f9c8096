//! Application data models

use serde::{Deserialize, Serialize};

use crate::okta::models::Profile;

/// Application record from the Okta API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct App {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub label: Option<String>,
}

impl App {
    /// Display label, falling back to the internal name
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// One group assigned to an application
///
/// The assignment listing carries only the group ID and a profile with
/// role data; `name` is filled in afterwards by a per-group lookup.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GroupAssignment {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub profile: Profile,
}

impl GroupAssignment {
    /// Resolved group name, empty when the lookup failed
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
