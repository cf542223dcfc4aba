#![doc = r#"
sentiscan — resumable batch sentiment scoring for on-disk text corpora.

This crate scores text documents through the Watson Natural Language
Understanding sentiment endpoint and tracks which documents of a corpus have
already been scored, so repeated runs make incremental progress without
redundant service calls. It powers the sentiscan CLI and can be embedded in
your own Rust applications.

Corpus layout
-------------
A corpus is a directory tree. Only files named `<digits>_<digits>.txt` are
documents; everything else is skipped. A scored document gets a sidecar
artifact next to it, the document path plus `.watson`, holding the plain-text
score. The sidecar's existence is the sole "already processed" marker:

```text
corpus/
  pos/
    1_7.txt
    1_7.txt.watson     <- already scored, skipped on the next run
    2_8.txt            <- pending, scored on the next run
  notes.md             <- not a document, ignored
```

Quick start: walk a corpus
--------------------------
```rust,no_run
use std::path::Path;
use sentiscan::{Credentials, NluClient, ServiceConfig, analyze_dataset};

fn main() -> sentiscan::Result<()> {
    let credentials = Credentials::from_file("bluemix.json")?;
    let client = NluClient::new(&credentials, &ServiceConfig::default());

    let report = analyze_dataset(&client, Path::new("/data/reviews"))?;
    println!(
        "scored={} already={} failed={}",
        report.scored, report.already_analyzed, report.failed
    );
    Ok(())
}
```

Survey progress without spending quota
--------------------------------------
```rust,no_run
use std::path::Path;
use sentiscan::dataset_stats;

fn main() -> sentiscan::Result<()> {
    let stats = dataset_stats(Path::new("/data/reviews"))?;
    for dir in &stats.directories {
        println!("{:?}: analyzed={} not_scored={}", dir.directory, dir.analyzed, dir.not_scored);
    }
    Ok(())
}
```

Error handling
--------------
All public functions return `sentiscan::Result<T>`. During a dataset walk,
per-document failures are contained: the document stays unscored and is
retried on the next run. Only a usage-quota exhaustion aborts the walk, so a
caller can distinguish "stop and come back later" from everything else:

```rust,no_run
use std::path::Path;
use sentiscan::{Credentials, NluClient, ServiceConfig, analyze_dataset};

fn main() {
    let credentials = Credentials::from_file("bluemix.json").unwrap();
    let client = NluClient::new(&credentials, &ServiceConfig::default());

    match analyze_dataset(&client, Path::new("/data/reviews")) {
        Ok(report) => println!("done, {} newly scored", report.scored),
        Err(e) if e.is_quota() => eprintln!("quota exhausted, rerun tomorrow: {e}"),
        Err(e) => eprintln!("walk failed: {e}"),
    }
}
```

Custom scorers
--------------
The walker only depends on the [`SentimentScorer`] trait, so tests and
embedders can substitute any scoring backend for the HTTP client.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`corpus`] — the traversal engine: classification, result store, walker, stats.
- [`nlu`] — credentials and the blocking service client.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod corpus;
pub mod error;
pub mod nlu;
pub mod types;

// Curated public API surface
// Types
pub use error::{Error, Result};
pub use types::DocumentKey;

// Service layer
pub use nlu::{Credentials, NluClient, NluError, SentimentScorer, ServiceConfig};

// Corpus engine
pub use corpus::classify::{classify_file_name, is_result_artifact};
pub use corpus::store::RESULT_SUFFIX;
pub use corpus::{CorpusStats, DirStats, WalkReport};

// High-level API re-exports
pub use api::{analyze_dataset, analyze_file, analyze_text, dataset_stats};
