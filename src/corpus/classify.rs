//! Filename convention for eligible corpus documents.
//!
//! A document is any file named `<digits>_<digits>.txt`; the two groups are
//! the document id and its label. Result artifacts are excluded before
//! pattern matching so a prior run's outputs are never re-scored.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::corpus::store::RESULT_SUFFIX;
use crate::types::DocumentKey;

static DOCUMENT_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)_(\d+)\.txt$").unwrap());

/// True when a file name denotes a persisted result artifact.
pub fn is_result_artifact(name: &str) -> bool {
    name.ends_with(RESULT_SUFFIX)
}

/// Parse a document identity out of an eligible file name.
///
/// Returns `None` for result artifacts and for any name that does not fully
/// match the convention; such files are skipped by both the walker and the
/// stats reporter.
pub fn classify_file_name(name: &str) -> Option<DocumentKey> {
    if is_result_artifact(name) {
        return None;
    }
    let caps = DOCUMENT_NAME.captures(name)?;
    let id = caps[1].parse().ok()?;
    let label = caps[2].parse().ok()?;
    Some(DocumentKey { id, label })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_names_are_eligible() {
        assert_eq!(
            classify_file_name("12_3.txt"),
            Some(DocumentKey { id: 12, label: 3 })
        );
        assert_eq!(
            classify_file_name("0_0.txt"),
            Some(DocumentKey { id: 0, label: 0 })
        );
    }

    #[test]
    fn non_matching_names_are_rejected() {
        assert_eq!(classify_file_name("a_1.txt"), None);
        assert_eq!(classify_file_name("12.txt"), None);
        assert_eq!(classify_file_name("notes.md"), None);
        assert_eq!(classify_file_name("x12_3.txt"), None);
        assert_eq!(classify_file_name("12_3.txt.gz"), None);
        assert_eq!(classify_file_name("12_3_4.txt"), None);
    }

    #[test]
    fn result_artifacts_are_never_documents() {
        assert_eq!(classify_file_name("12_3.watson"), None);
        assert_eq!(classify_file_name("12_3.txt.watson"), None);
        assert!(is_result_artifact("12_3.txt.watson"));
        assert!(!is_result_artifact("12_3.txt"));
    }

    #[test]
    fn oversized_numeric_groups_are_rejected() {
        // matches the pattern textually but overflows the id type
        assert_eq!(classify_file_name("99999999999999999999999_1.txt"), None);
    }
}
