//! Creative Commons license link extraction.

use regex::Regex;
use std::sync::OnceLock;

/// A quoted `creativecommons.org/licenses/...` or `/publicdomain/...` URL.
///
/// The capture stops at the first closing quote and never crosses a line.
const CC_LICENSE_URL_PATTERN: &str =
    r#"(?i)"(https?://creativecommons\.org/(?:licenses|publicdomain)/[^"\r\n]*)""#;

static CC_LICENSE_URL_REGEX: OnceLock<Regex> = OnceLock::new();

fn license_regex() -> &'static Regex {
    CC_LICENSE_URL_REGEX.get_or_init(|| {
        Regex::new(CC_LICENSE_URL_PATTERN).expect("license URL pattern is valid")
    })
}

/// Find the first Creative Commons license URL in a page body.
///
/// Returns the URL without its surrounding quotes.
pub fn extract_license_url(body: &str) -> Option<String> {
    license_regex()
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Errors that can occur while looking up a sound's license
#[derive(Debug, thiserror::Error)]
pub enum LicenseError {
    #[error("Network error fetching {url}: {message}")]
    Network { url: String, message: String },

    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: u16 },

    #[error("Unable to obtain CC license URL for sound at URL:{url}")]
    NotFound { url: String },
}
