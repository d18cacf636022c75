//! Trait seam between the attribution pass and the network.
//!
//! Production code uses [`FreesoundClient`]; tests substitute an in-memory
//! source so collection can be exercised without HTTP.
//!
//! [`FreesoundClient`]: super::FreesoundClient

use async_trait::async_trait;

use super::license::LicenseError;

/// Anything that can resolve a sound page URL to its license URL.
#[async_trait]
pub trait LicenseSource: Send + Sync {
    /// Return the Creative Commons license URL for a sound page.
    async fn license_for(&self, page_url: &str) -> Result<String, LicenseError>;
}

#[async_trait]
impl LicenseSource for super::client::FreesoundClient {
    async fn license_for(&self, page_url: &str) -> Result<String, LicenseError> {
        self.fetch_license_url(page_url).await
    }
}
