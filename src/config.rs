/// Configuration constants for the Okta API
pub mod api {
    /// Base path for Okta API v1
    pub const BASE_PATH: &str = "/api/v1";

    /// Applications endpoint
    pub const APPS: &str = "apps";

    /// Groups endpoint
    pub const GROUPS: &str = "groups";

    /// Users endpoint (nested under groups)
    pub const USERS: &str = "users";

    /// Status filter applied to application searches
    pub const ACTIVE_APPS_FILTER: &str = "status eq \"ACTIVE\"";

    /// Page limit for application group assignment listings
    pub const GROUP_ASSIGNMENT_LIMIT: u32 = 200;

    /// Page limit for group searches and group user listings
    pub const GROUP_LIMIT: u32 = 100;

    /// Concurrency bound for group name lookups during assignment enrichment
    pub const MAX_CONCURRENT_GROUP_LOOKUPS: usize = 5;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Config file path relative to HOME
    pub const FILE_PATH: &str = ".oktactl/config.json";

    /// Environment variable names for the API token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["OKTA_TOKEN", "OKTA_API_TOKEN"];

    /// Environment variable name for the org base URL
    pub const ORG_ENV_VAR: &str = "OKTA_ORG_URL";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_path_format() {
        assert!(api::BASE_PATH.starts_with('/'));
    }

    #[test]
    fn test_credentials_env_vars() {
        assert_eq!(
            credentials::TOKEN_ENV_VARS,
            &["OKTA_TOKEN", "OKTA_API_TOKEN"]
        );
    }

    #[test]
    fn test_page_limits() {
        assert_eq!(api::GROUP_ASSIGNMENT_LIMIT, 200);
        assert_eq!(api::GROUP_LIMIT, 100);
    }
}
