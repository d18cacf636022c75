//! The attribution pipeline: scan, parse, optional license lookup, report.

use std::path::PathBuf;
use tokio::runtime::Runtime;
use tracing::{info, warn};

use super::Settings;
use crate::attribution;
use crate::freesound::{FreesoundClient, LicenseSource};
use crate::report;
use crate::scanner::{self, ExtensionSet};

/// What a completed run produced
#[derive(Debug)]
pub struct Outcome {
    /// The document written to the output file
    pub document: String,
    /// Files that matched an extension but not the naming convention
    pub invalid: Vec<PathBuf>,
}

/// Scan, collect and write the attribution file
pub fn cmd_attribute(rt: &Runtime, settings: &Settings) -> anyhow::Result<Outcome> {
    let client = if settings.collect_licenses {
        Some(FreesoundClient::new(&settings.freesound)?)
    } else {
        None
    };
    let licenses = client.as_ref().map(|c| c as &dyn LicenseSource);

    attribute_with(rt, settings, licenses)
}

/// Pipeline body with the license source injected
pub(crate) fn attribute_with(
    rt: &Runtime,
    settings: &Settings,
    licenses: Option<&dyn LicenseSource>,
) -> anyhow::Result<Outcome> {
    let extensions = ExtensionSet::new(&settings.extensions);
    if extensions.is_empty() {
        warn!("No file extensions configured, nothing will be matched");
    }
    info!(
        root = %settings.root_dir.display(),
        collect_licenses = settings.collect_licenses,
        "Scanning for Freesound downloads"
    );

    let paths = scanner::scan(&settings.root_dir, &extensions)?;
    let scan = rt.block_on(attribution::collect(
        &paths,
        &settings.freesound.base_url,
        licenses,
    ))?;

    let document = report::render(&settings.project_type, settings.collect_licenses, &scan.valid);
    report::write(&settings.output, &document)?;

    Ok(Outcome {
        document,
        invalid: scan.invalid,
    })
}
