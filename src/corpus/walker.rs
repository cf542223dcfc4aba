//! The resumable dataset walker: one deterministic pass over a corpus root,
//! scoring every eligible document that has no result artifact yet.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

use crate::corpus::classify::{classify_file_name, is_result_artifact};
use crate::corpus::store;
use crate::error::Result;
use crate::nlu::SentimentScorer;

/// Aggregate outcome of one dataset pass
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkReport {
    /// Documents scored and persisted in this run
    pub scored: usize,
    /// Eligible documents that already had a result artifact
    pub already_analyzed: usize,
    /// Files skipped because their name does not match the convention
    pub unmatched: usize,
    /// Documents left unscored after a recoverable failure
    pub failed: usize,
}

/// Every directory under `root`, the root itself included, depth-first in
/// sorted filename order. Each subdirectory is visited exactly once.
pub(crate) fn walk_directories(root: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }
    Ok(dirs)
}

/// Files directly inside `dir`, in sorted name order.
pub(crate) fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Walk the corpus rooted at `root`, scoring every pending document.
///
/// A per-item failure (unreadable file, recoverable service error) is logged
/// and skipped so the document is retried on the next run; a quota-exhaustion
/// failure aborts the whole run immediately, leaving the artifacts written so
/// far valid.
pub fn walk_dataset<S: SentimentScorer>(root: &Path, scorer: &S) -> Result<WalkReport> {
    let mut report = WalkReport::default();

    for dir in walk_directories(root)? {
        debug!("Scanning directory: {:?}", dir);
        process_directory(&dir, scorer, &mut report)?;
    }

    info!(
        "Dataset walk complete: scored={} already_analyzed={} unmatched={} failed={}",
        report.scored, report.already_analyzed, report.unmatched, report.failed
    );
    Ok(report)
}

fn process_directory<S: SentimentScorer>(
    dir: &Path,
    scorer: &S,
    report: &mut WalkReport,
) -> Result<()> {
    for path in list_files(dir)? {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };

        if is_result_artifact(&name) {
            continue;
        }

        let Some(key) = classify_file_name(&name) else {
            info!("Skipping non-matching file: {:?}", path);
            report.unmatched += 1;
            continue;
        };

        if store::result_exists(&path) {
            report.already_analyzed += 1;
            continue;
        }

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Could not read document {} at {:?}: {}", key, path, e);
                report.failed += 1;
                continue;
            }
        };

        match scorer.score(&text) {
            Ok(score) => {
                store::write_result(&path, score)?;
                debug!("Scored document {}: {}", key, score);
                report.scored += 1;
            }
            Err(e) if e.is_quota() => {
                error!("Stopping dataset walk at {:?}: {}", path, e);
                return Err(e.into());
            }
            Err(e) => {
                warn!("Scoring failed for document {} at {:?}: {}", key, path, e);
                report.failed += 1;
            }
        }
    }

    Ok(())
}
