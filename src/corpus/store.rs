//! Sidecar result store: one artifact per scored document, written next to
//! its input. Artifact existence is the sole "already processed" marker; an
//! artifact, once written, is never overwritten by a later run.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Suffix appended to a document path to form its result artifact path
pub const RESULT_SUFFIX: &str = ".watson";

/// Result artifact path for a document.
pub fn result_path(document: &Path) -> PathBuf {
    let mut raw = document.as_os_str().to_owned();
    raw.push(RESULT_SUFFIX);
    PathBuf::from(raw)
}

/// Whether a result artifact already exists for a document.
pub fn result_exists(document: &Path) -> bool {
    result_path(document).exists()
}

/// Persist a document's score as its sidecar artifact.
///
/// Whole-file truncating write of the score's plain text form, no header and
/// no trailing structure. Callers check `result_exists` first, so an existing
/// artifact is never rewritten.
pub fn write_result(document: &Path, score: f64) -> io::Result<()> {
    let sidecar = result_path(document);
    fs::write(&sidecar, score.to_string())?;
    debug!("Wrote result artifact {:?}", sidecar);
    Ok(())
}
