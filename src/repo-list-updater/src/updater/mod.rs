//! Adds or re-describes repository entries in a JSON file.

mod config;
mod outcome;

pub use config::{UpdaterConfig, DEFAULT_LIST_KEY};
pub use outcome::{UpdateOutcome, UpdateReport};

use crate::document::{Document, DocumentError};
use std::path::Path;
use tracing::info;

/// Prefix of the message printed when an update fails.
pub const ERROR_PREFIX: &str = "Error updating JSON file";

/// Loads the document at `path`, upserts the entry for `url` and writes the
/// document back.
///
/// Every entry whose `url` matches exactly gets `description`. When none
/// matches, a new entry named after the last path segment of `url` is
/// appended. In dry-run mode the file is left untouched and the rendered
/// document is only returned.
///
/// # Errors
///
/// Returns [`DocumentError`] if the file can't be read, parsed, rendered or
/// written.
pub fn try_update_entry(
    path: &Path,
    url: &str,
    description: &str,
    config: &UpdaterConfig,
) -> Result<UpdateReport, DocumentError> {
    let mut document = Document::load(path, config.list_key())?;
    let outcome = document.upsert(url, description);
    let rendered = document.to_pretty_string()?;

    if config.dry_run() {
        info!(path = %path.display(), ?outcome, "Dry run, not writing document");
        return Ok(UpdateReport {
            outcome,
            rendered,
            written: false,
        });
    }

    document.write_rendered(&rendered)?;
    info!(path = %path.display(), ?outcome, "Updated document");

    Ok(UpdateReport {
        outcome,
        rendered,
        written: true,
    })
}

/// Updates the entry for `url` in the document at `path` using the default
/// list key.
///
/// Failures are reported on stderr and turned into `false`.
pub fn update_entry(path: &Path, url: &str, description: &str) -> bool {
    match try_update_entry(path, url, description, &UpdaterConfig::default()) {
        Ok(_) => true,
        Err(e) => {
            report_failure(&e);
            false
        }
    }
}

/// Prints an update failure to stderr.
pub fn report_failure(error: &DocumentError) {
    eprintln!("{ERROR_PREFIX}: {error}");
}
