//! Dataset-traversal engine: filename classification, the sidecar result
//! store, the resumable walker, and read-only progress statistics. These are
//! the primitives consumed by the high-level `api` module.
pub mod classify;
pub mod stats;
pub mod store;
pub mod walker;

pub use stats::{CorpusStats, DirStats};
pub use walker::WalkReport;
