//! Freesound HTTP client
//!
//! Fetches public sound pages from freesound.org. No API key is needed for
//! page scraping; requests are made one at a time and never retried.

use super::license::{LicenseError, extract_license_url};
use crate::config::FreesoundConfig;

/// User agent string sent with every page request
const USER_AGENT: &str = concat!(
    "FreesoundAttributor/",
    env!("CARGO_PKG_VERSION"),
    " (+https://freesound.org)"
);

/// Freesound page client
pub struct FreesoundClient {
    http_client: reqwest::Client,
}

impl FreesoundClient {
    /// Create a client from config
    pub fn new(config: &FreesoundConfig) -> reqwest::Result<Self> {
        let user_agent = if config.user_agent.is_empty() {
            USER_AGENT
        } else {
            config.user_agent.as_str()
        };
        let http_client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self { http_client })
    }

    /// Create a client for testing against a loopback server
    #[cfg(test)]
    pub fn local() -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .no_proxy()
            .build()
            .expect("Failed to build HTTP client");

        Self { http_client }
    }

    /// Fetch a sound page and return the license link it carries
    pub async fn fetch_license_url(&self, url: &str) -> Result<String, LicenseError> {
        tracing::info!("Fetching license URL for sample at {}", url);

        let body = self.fetch_page(url).await?;

        let license = extract_license_url(&body).ok_or_else(|| LicenseError::NotFound {
            url: url.to_string(),
        })?;
        tracing::debug!(%url, %license, "Found license");
        Ok(license)
    }

    /// Send the HTTP request and decode the body using the response charset
    async fn fetch_page(&self, url: &str) -> Result<String, LicenseError> {
        let network = |e: reqwest::Error| LicenseError::Network {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.http_client.get(url).send().await.map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LicenseError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(network)
    }
}
