//! Org base URL resolution from multiple sources

use log::debug;

use super::credentials::ConfigFile;
use crate::config::credentials;
use crate::error::{OktaError, Result};

/// Org URL resolution with fallback logic
pub struct OrgResolver;

impl OrgResolver {
    /// Resolve the org base URL from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (OKTA_ORG_URL)
    /// 3. Config file (~/.oktactl/config.json)
    ///
    /// A bare hostname is accepted and normalized to `https://<host>`.
    pub fn resolve(cli_org: Option<&str>) -> Result<String> {
        if let Some(org) = cli_org {
            debug!("Using org URL from CLI argument: {}", org);
            return Ok(Self::normalize(org));
        }

        if let Ok(org) = std::env::var(credentials::ORG_ENV_VAR) {
            debug!(
                "Using org URL from {} environment variable: {}",
                credentials::ORG_ENV_VAR,
                org
            );
            return Ok(Self::normalize(&org));
        }

        debug!(
            "No org URL in CLI or {}, trying config file",
            credentials::ORG_ENV_VAR
        );

        if let Some(config) = ConfigFile::load()? {
            if let Some(org) = config.org {
                debug!("Using org URL from config file: {}", org);
                return Ok(Self::normalize(&org));
            }
        }

        Err(OktaError::OrgNotFound(Self::org_not_found_message()))
    }

    /// Normalize a host or URL to an https base URL without trailing slash
    fn normalize(org: &str) -> String {
        let org = org.trim_end_matches('/');
        if org.starts_with("http://") || org.starts_with("https://") {
            org.to_string()
        } else {
            format!("https://{}", org)
        }
    }

    /// Generate a helpful error message when no org URL is found
    fn org_not_found_message() -> String {
        let config_path = ConfigFile::path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| format!("~/{}", credentials::FILE_PATH));

        format!(
            "No Okta org URL specified. Please provide one using one of:\n\
             \n\
             1. CLI argument:      oktactl --org-url <URL>\n\
             2. Environment var:   export {}=<URL>\n\
             3. Config file:       {{\"org\": \"<URL>\"}} in {}",
            credentials::ORG_ENV_VAR,
            config_path
        )
    }
}
