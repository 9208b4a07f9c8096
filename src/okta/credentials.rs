//! API token resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::fs;

use crate::config::credentials;
use crate::error::{OktaError, Result};

/// Config file structure (~/.oktactl/config.json)
#[derive(Deserialize, Debug, Default)]
pub(crate) struct ConfigFile {
    pub(crate) org: Option<String>,
    pub(crate) token: Option<String>,
}

impl ConfigFile {
    /// Path to the config file
    pub(crate) fn path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|p| p.join(credentials::FILE_PATH))
    }

    /// Load and parse the config file; `None` when it does not exist
    pub(crate) fn load() -> Result<Option<ConfigFile>> {
        let Some(path) = Self::path() else {
            return Ok(None);
        };

        debug!("Looking for config file at: {}", path.display());

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return Ok(None),
        };

        let config: ConfigFile = serde_json::from_str(&content).map_err(|e| {
            OktaError::Credentials(format!(
                "Could not parse config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Some(config))
    }
}

/// Token resolution with fallback logic
pub struct TokenResolver;

impl TokenResolver {
    /// Resolve the API token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (OKTA_TOKEN, OKTA_API_TOKEN - in order)
    /// 3. Config file (~/.oktactl/config.json)
    pub fn resolve(cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        for env_var in credentials::TOKEN_ENV_VARS {
            if let Ok(token) = std::env::var(env_var) {
                debug!("Using token from {} environment variable", env_var);
                return Ok(token);
            }
        }

        debug!(
            "No token in environment variables {:?}, trying config file",
            credentials::TOKEN_ENV_VARS
        );

        if let Some(config) = ConfigFile::load()? {
            if let Some(token) = config.token {
                debug!("Using token from config file");
                return Ok(token);
            }
        }

        Err(OktaError::TokenNotFound(Self::token_not_found_message()))
    }

    /// Generate a helpful error message when no token is found
    fn token_not_found_message() -> String {
        let env_vars = credentials::TOKEN_ENV_VARS.join(", ");
        let config_path = ConfigFile::path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| format!("~/{}", credentials::FILE_PATH));

        format!(
            "No Okta API token found. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      oktactl --token <TOKEN>\n\
             2. Environment var:   export OKTA_TOKEN=<TOKEN>  (also: OKTA_API_TOKEN)\n\
             3. Config file:       {{\"token\": \"<TOKEN>\"}} in {}\n\
             \n\
             Checked: env vars [{}]",
            config_path, env_vars
        )
    }
}
