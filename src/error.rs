use std::fmt;

/// Custom error type for Okta operations
#[derive(Debug)]
pub enum OktaError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Token not found in any source
    TokenNotFound(String),
    /// Org URL not found in any source
    OrgNotFound(String),
    /// Failed to read or parse the config file
    Credentials(String),
    /// JSON parsing error
    Json(String),
}

impl fmt::Display for OktaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OktaError::Http(e) => write!(f, "HTTP request failed: {}", e),
            OktaError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            OktaError::TokenNotFound(msg) => write!(f, "{}", msg),
            OktaError::OrgNotFound(msg) => write!(f, "{}", msg),
            OktaError::Credentials(msg) => write!(f, "{}", msg),
            OktaError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for OktaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OktaError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OktaError {
    fn from(err: reqwest::Error) -> Self {
        OktaError::Http(err)
    }
}

impl From<serde_json::Error> for OktaError {
    fn from(err: serde_json::Error) -> Self {
        OktaError::Json(err.to_string())
    }
}

impl From<std::io::Error> for OktaError {
    fn from(err: std::io::Error) -> Self {
        OktaError::Credentials(err.to_string())
    }
}

/// Result type alias for Okta operations
pub type Result<T> = std::result::Result<T, OktaError>;
