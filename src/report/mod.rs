//! Attribution report rendering and output.
//!
//! The report is a header sentence followed by one ` * ` bullet per sound,
//! joined with `\n` and written without a trailing newline.

use std::path::{Path, PathBuf};

use crate::attribution::Attribution;
use crate::error::{Result, ResultExt, path_context};

/// Header used when license links were collected
fn licensed_header(project_type: &str) -> String {
    format!("This {} uses the following sounds from freesound.org:", project_type)
}

/// Header used when only page links are listed
fn unlicensed_header(project_type: &str) -> String {
    format!(
        "This {} uses the following sounds from freesound.org under Creative Commons licenses, see links for license details.",
        project_type
    )
}

/// Render the full report document.
///
/// Note the header pairing: the "see links for license details" sentence is
/// the one used when no license links are listed.
pub fn render(project_type: &str, collect_licenses: bool, entries: &[Attribution]) -> String {
    let header = if collect_licenses {
        licensed_header(project_type)
    } else {
        unlicensed_header(project_type)
    };

    std::iter::once(header)
        .chain(entries.iter().map(|entry| format!(" * {}", entry)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the document to `path`, replacing any existing file.
pub fn write(path: &Path, document: &str) -> Result<()> {
    std::fs::write(path, document).with_context(path_context("Failed to write", path))?;
    tracing::info!(path = %path.display(), bytes = document.len(), "Wrote attribution file");
    Ok(())
}

/// Confirmation echoed to stdout after a successful write
pub fn confirmation(path: &Path, document: &str) -> String {
    format!(
        "\nWrote valid attribution data to {}:\n\n{}",
        path.display(),
        document
    )
}

/// Warning block listing files that don't follow the naming convention
pub fn invalid_report(paths: &[PathBuf]) -> String {
    let mut report = String::from(
        "\nFound files with matching extensions which did not conform to the expected Freesound naming convention:\n",
    );
    for path in paths {
        report.push_str(&path.to_string_lossy());
        report.push('\n');
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribution::parse_filename;

    fn entry(name: &str, license: Option<&str>) -> Attribution {
        let sound = parse_filename(Path::new(name)).unwrap();
        Attribution {
            url: sound.page_url("https://freesound.org"),
            sound,
            license: license.map(str::to_string),
        }
    }

    #[test]
    fn test_render_without_licenses() {
        let doc = render("game", false, &[entry("123__alice__kick.wav", None)]);
        assert_eq!(
            doc,
            "This game uses the following sounds from freesound.org under Creative Commons licenses, see links for license details.\n * kick by alice from https://freesound.org/people/alice/sounds/123/"
        );
    }

    #[test]
    fn test_render_with_licenses() {
        let doc = render(
            "film",
            true,
            &[
                entry("1__a__one.wav", Some("https://creativecommons.org/licenses/by/4.0/")),
                entry("2__b__two.wav", Some("https://creativecommons.org/publicdomain/zero/1.0/")),
            ],
        );
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "This film uses the following sounds from freesound.org:");
        assert_eq!(
            lines[1],
            " * one by a from https://freesound.org/people/a/sounds/1/ under license: https://creativecommons.org/licenses/by/4.0/"
        );
        assert!(lines[2].starts_with(" * two by b"));
    }

    #[test]
    fn test_render_empty_is_header_only() {
        let doc = render("project", false, &[]);
        assert!(!doc.contains('\n'));
        assert!(doc.starts_with("This project uses"));
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attribution.txt");
        std::fs::write(&path, "old content that is much longer than the new one").unwrap();

        write(&path, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("attribution.txt");
        let err = write(&path, "x").unwrap_err();
        assert!(err.to_string().contains("attribution.txt"));
    }

    #[test]
    fn test_confirmation_includes_document() {
        let msg = confirmation(Path::new("out.txt"), "This project uses");
        assert_eq!(msg, "\nWrote valid attribution data to out.txt:\n\nThis project uses");
    }

    #[test]
    fn test_invalid_report_lists_paths() {
        let report = invalid_report(&[PathBuf::from("/a/weird.wav"), PathBuf::from("/b/odd.ogg")]);
        assert!(report.starts_with("\nFound files with matching extensions"));
        assert!(report.ends_with("/a/weird.wav\n/b/odd.ogg\n"));
    }
}
