//! Freesound.org access - sound page URLs and license lookup.
//!
//! # Architecture
//!
//! - **License** (`license.rs`) - Extracts the Creative Commons link from page HTML
//! - **Client** (`client.rs`) - HTTP client that fetches sound pages
//! - **Traits** (`traits.rs`) - Seam between the attribution pass and the network
//!
//! Licenses are scraped from the public sound page; no API key is involved.

pub mod client;
pub mod license;
pub mod traits;

pub use client::FreesoundClient;
pub use license::LicenseError;
pub use traits::LicenseSource;
