//! Okta HTTP client for API interactions

use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::config::api;
use crate::error::{OktaError, Result};

/// Okta API client
///
/// Wraps a reqwest client with the org base URL and the SSWS token
/// header Okta expects on every request.
pub struct OktaClient {
    client: Client,
    token: String,
    org_url: String,
}

impl OktaClient {
    /// Create a new Okta client with connection reuse and timeouts
    pub fn new(token: String, org_url: String) -> Self {
        let client = Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            org_url: org_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        format!("{}{}", self.org_url, api::BASE_PATH)
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("SSWS {}", self.token))
            .header("Accept", "application/json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Parse an API response, returning an error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(OktaError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response.json().await?)
    }

    /// Fetch a single resource by API path
    ///
    /// Returns `None` for 404 and an error for any other non-success
    /// status. Transport and decode failures always propagate.
    pub(crate) async fn fetch_resource_by_path<T>(
        &self,
        path: &str,
        resource_label: &str,
    ) -> Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(&url).send().await?;

        match response.status().as_u16() {
            200 => {
                let item: T = response.json().await.map_err(|e| OktaError::Api {
                    status: 200,
                    message: format!("Failed to parse {}: {}", resource_label, e),
                })?;
                Ok(Some(item))
            }
            404 => Ok(None),
            status => Err(OktaError::Api {
                status,
                message: format!("Failed to fetch {}", resource_label),
            }),
        }
    }
}

#[cfg(test)]
impl OktaClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new("test-token".to_string(), base_url.to_string())
    }
}
