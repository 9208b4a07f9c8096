//! Group and user data models

use serde::{Deserialize, Serialize};

use crate::okta::models::Profile;

/// Group record from the Okta API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Group {
    pub id: String,
    #[serde(rename = "lastUpdated")]
    pub last_updated: Option<String>,
    #[serde(rename = "lastMembershipUpdated")]
    pub last_membership_updated: Option<String>,
    #[serde(rename = "type")]
    pub group_type: Option<String>,
    #[serde(default)]
    pub profile: Profile,
}

impl Group {
    /// Group display name from the profile
    pub fn name(&self) -> &str {
        self.profile.name.as_deref().unwrap_or("")
    }

    /// Group type tag (OKTA_GROUP, APP_GROUP, BUILT_IN)
    pub fn group_type(&self) -> &str {
        self.group_type.as_deref().unwrap_or("")
    }

    pub fn last_updated(&self) -> &str {
        self.last_updated.as_deref().unwrap_or("")
    }
}

/// User record from the Okta API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub profile: Profile,
}

impl User {
    pub fn email(&self) -> &str {
        self.profile.email.as_deref().unwrap_or("")
    }

    pub fn first_name(&self) -> &str {
        self.profile.first_name.as_deref().unwrap_or("")
    }

    pub fn last_name(&self) -> &str {
        self.profile.last_name.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_group() {
        let json = r#"{
            "id": "00g1hqieohhlPBv581d8",
            "lastUpdated": "2024-02-06T12:00:00.000Z",
            "lastMembershipUpdated": "2024-03-01T09:30:00.000Z",
            "type": "OKTA_GROUP",
            "profile": {
                "name": "Engineering",
                "description": "All engineers"
            }
        }"#;

        let group: Group = serde_json::from_str(json).unwrap();
        assert_eq!(group.id, "00g1hqieohhlPBv581d8");
        assert_eq!(group.name(), "Engineering");
        assert_eq!(group.group_type(), "OKTA_GROUP");
        assert_eq!(group.last_updated(), "2024-02-06T12:00:00.000Z");
    }

    #[test]
    fn test_group_defaults() {
        let json = r#"{"id": "00g-minimal"}"#;
        let group: Group = serde_json::from_str(json).unwrap();
        assert_eq!(group.name(), "");
        assert_eq!(group.group_type(), "");
        assert_eq!(group.last_updated(), "");
    }

    #[test]
    fn test_deserialize_user() {
        let json = r#"{
            "id": "00u1abcd",
            "profile": {
                "email": "jane.doe@example.com",
                "firstName": "Jane",
                "lastName": "Doe"
            }
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "00u1abcd");
        assert_eq!(user.email(), "jane.doe@example.com");
        assert_eq!(user.first_name(), "Jane");
        assert_eq!(user.last_name(), "Doe");
    }

    #[test]
    fn test_user_defaults() {
        let json = r#"{"id": "00u-minimal"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.email(), "");
        assert_eq!(user.first_name(), "");
        assert_eq!(user.last_name(), "");
    }
}
