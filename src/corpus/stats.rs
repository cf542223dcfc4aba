//! Read-only progress statistics over a corpus: the same enumeration and
//! eligibility computation as the walker, counting instead of scoring.
use std::path::{Path, PathBuf};

use crate::corpus::classify::classify_file_name;
use crate::corpus::store;
use crate::corpus::walker::{list_files, walk_directories};
use crate::error::Result;

/// Counts for a single visited directory
#[derive(Debug, Clone)]
pub struct DirStats {
    pub directory: PathBuf,
    /// Eligible documents with a result artifact
    pub analyzed: usize,
    /// Eligible documents still waiting for a score
    pub not_scored: usize,
}

/// Per-directory and aggregate counts for a whole corpus
#[derive(Debug, Clone, Default)]
pub struct CorpusStats {
    pub directories: Vec<DirStats>,
    pub analyzed: usize,
    pub not_scored: usize,
}

/// Survey the corpus rooted at `root` without any scoring calls or writes.
pub fn collect_stats(root: &Path) -> Result<CorpusStats> {
    let mut stats = CorpusStats::default();

    for dir in walk_directories(root)? {
        let mut analyzed = 0;
        let mut not_scored = 0;

        for path in list_files(&dir)? {
            let eligible = path
                .file_name()
                .map(|n| n.to_string_lossy())
                .is_some_and(|name| classify_file_name(&name).is_some());
            if !eligible {
                continue;
            }
            if store::result_exists(&path) {
                analyzed += 1;
            } else {
                not_scored += 1;
            }
        }

        stats.analyzed += analyzed;
        stats.not_scored += not_scored;
        stats.directories.push(DirStats {
            directory: dir,
            analyzed,
            not_scored,
        });
    }

    Ok(stats)
}
