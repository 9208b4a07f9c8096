//! Shared data models for the Okta API

use serde::{Deserialize, Serialize};

/// Profile sub-record embedded in groups, group assignments and users
///
/// Which fields are populated depends on the owning entity: groups carry
/// name/description, app group assignments carry SAML role data, users
/// carry email and first/last name.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Profile {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "samlRoles", default)]
    pub saml_roles: Vec<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_group_profile() {
        let json = r#"{
            "name": "Engineering",
            "description": "All engineers"
        }"#;

        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name.as_deref(), Some("Engineering"));
        assert_eq!(profile.description.as_deref(), Some("All engineers"));
        assert!(profile.saml_roles.is_empty());
        assert!(profile.email.is_none());
    }

    #[test]
    fn test_deserialize_assignment_profile() {
        let json = r#"{
            "samlRoles": ["admin", "viewer"],
            "role": "admin"
        }"#;

        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.saml_roles, vec!["admin", "viewer"]);
        assert_eq!(profile.role.as_deref(), Some("admin"));
    }

    #[test]
    fn test_deserialize_user_profile() {
        let json = r#"{
            "email": "jane.doe@example.com",
            "firstName": "Jane",
            "lastName": "Doe"
        }"#;

        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(profile.first_name.as_deref(), Some("Jane"));
        assert_eq!(profile.last_name.as_deref(), Some("Doe"));
    }

    #[test]
    fn test_profile_default_is_empty() {
        let profile = Profile::default();
        assert!(profile.name.is_none());
        assert!(profile.saml_roles.is_empty());
        assert!(profile.role.is_none());
    }
}
