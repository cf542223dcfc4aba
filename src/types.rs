//! Shared types used across sentiscan.
use serde::{Deserialize, Serialize};

/// Identity parsed from an eligible document filename `<id>_<label>.txt`.
///
/// The traversal engine only needs the identity to decide eligibility; the
/// label is kept anyway so consumers of the result artifacts do not have to
/// re-derive it from the filename.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct DocumentKey {
    pub id: u64,
    pub label: u64,
}

impl std::fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.id, self.label)
    }
}
