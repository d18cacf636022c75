//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while
//! CLI/main uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level application error enum
//! - Module-specific errors ([`LicenseError`]) for detailed handling
//! - Every variant except a naming mismatch is fatal to a run; naming
//!   mismatches are not errors at all, they are collected by
//!   [`crate::attribution::collect`]
//!
//! [`LicenseError`]: crate::freesound::LicenseError

use std::path::Path;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal error (missing or unreadable root)
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// License lookup failed for a sound
    #[error("License error: {0}")]
    License(#[from] crate::freesound::LicenseError),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

/// Context string naming a path, used by the filesystem call sites.
pub(crate) fn path_context(action: &str, path: &Path) -> String {
    format!("{} {}", action, path.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_with_context() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::Io(io).context("while writing attribution.txt");
        let msg = err.to_string();
        assert!(msg.contains("while writing attribution.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_license_error_converts() {
        let err: Error = crate::freesound::LicenseError::NotFound {
            url: "https://freesound.org/people/alice/sounds/123/".to_string(),
        }
        .into();
        assert!(err.to_string().contains("people/alice/sounds/123"));
    }

    #[test]
    fn test_result_ext_on_io() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let with_ctx = result.with_context("reading config");
        let msg = with_ctx.unwrap_err().to_string();
        assert!(msg.contains("reading config"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_path_context() {
        let ctx = path_context("Failed to write", Path::new("/tmp/out.txt"));
        assert_eq!(ctx, "Failed to write /tmp/out.txt");
    }
}
