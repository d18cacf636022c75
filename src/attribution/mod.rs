//! Filename parsing and attribution collection.
//!
//! Freesound names downloads `{sound_id}__{username}__{short_name}.{ext}`.
//! Every discovered file ends up in exactly one of the two lists of a
//! [`Scan`]: an [`Attribution`] if the name carries at least three
//! `__`-separated parts, otherwise its path in `invalid`.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::freesound::LicenseSource;

/// Separator Freesound places between the fields of a download name
pub const DELIMITER: &str = "__";

/// Sound identity recovered from a download filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundRef {
    pub sound_id: String,
    pub username: String,
    /// Third name component; anything after a further `__` is dropped
    pub short_name: String,
}

impl SoundRef {
    /// Public page of this sound under `base_url`
    pub fn page_url(&self, base_url: &str) -> String {
        format!(
            "{}/people/{}/sounds/{}/",
            base_url.trim_end_matches('/'),
            self.username,
            self.sound_id
        )
    }
}

/// Split a file's stem on `__`.
///
/// Returns `None` when fewer than three components are present.
pub fn parse_filename(path: &Path) -> Option<SoundRef> {
    let stem = path.file_stem()?.to_string_lossy();
    let mut parts = stem.split(DELIMITER);

    let sound_id = parts.next()?;
    let username = parts.next()?;
    let short_name = parts.next()?;

    Some(SoundRef {
        sound_id: sound_id.to_string(),
        username: username.to_string(),
        short_name: short_name.to_string(),
    })
}

/// One credited sound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    pub sound: SoundRef,
    pub url: String,
    pub license: Option<String>,
}

impl fmt::Display for Attribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} from {}",
            self.sound.short_name, self.sound.username, self.url
        )?;
        if let Some(license) = &self.license {
            write!(f, " under license: {}", license)?;
        }
        Ok(())
    }
}

/// Outcome of parsing every discovered file
#[derive(Debug, Default)]
pub struct Scan {
    /// Attributions in discovery order
    pub valid: Vec<Attribution>,
    /// Files with a matching extension but not the Freesound naming scheme
    pub invalid: Vec<PathBuf>,
}

/// Parse each path and, when `licenses` is given, look up its license.
///
/// Lookups run one at a time in path order. The first failed lookup aborts
/// the whole pass.
pub async fn collect(
    paths: &[PathBuf],
    base_url: &str,
    licenses: Option<&dyn LicenseSource>,
) -> Result<Scan> {
    let mut scan = Scan::default();

    for path in paths {
        let Some(sound) = parse_filename(path) else {
            tracing::debug!(path = %path.display(), "Not a Freesound name");
            scan.invalid.push(path.clone());
            continue;
        };

        let url = sound.page_url(base_url);
        let license = match licenses {
            Some(source) => Some(source.license_for(&url).await?),
            None => None,
        };

        scan.valid.push(Attribution {
            sound,
            url,
            license,
        });
    }

    tracing::info!(
        valid = scan.valid.len(),
        invalid = scan.invalid.len(),
        "Collected attributions"
    );
    Ok(scan)
}
