//! High-level, ergonomic library API: score a single text, a file line by
//! line, or a whole corpus tree, and survey corpus progress. Prefer these
//! entrypoints over the lower-level modules when embedding sentiscan.
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::info;

use crate::corpus::stats::{CorpusStats, collect_stats};
use crate::corpus::store;
use crate::corpus::walker::{WalkReport, walk_dataset};
use crate::error::Result;
use crate::nlu::SentimentScorer;

/// Score a single text payload.
pub fn analyze_text<S: SentimentScorer>(scorer: &S, text: &str) -> Result<f64> {
    Ok(scorer.score(text)?)
}

/// Score every line of `input`, writing one score per line to the result
/// artifact next to it. Returns the number of lines scored.
///
/// Unlike the dataset walker, any scoring failure here is fatal: the file is
/// a single unit of work.
pub fn analyze_file<S: SentimentScorer>(scorer: &S, input: &Path) -> Result<usize> {
    let reader = BufReader::new(File::open(input)?);
    let mut output = File::create(store::result_path(input))?;

    let mut count = 0;
    for line in reader.lines() {
        let line = line?;
        let score = scorer.score(&line)?;
        writeln!(output, "{score}")?;
        count += 1;
    }

    info!("Analyzed {} phrases from {:?}", count, input);
    Ok(count)
}

/// Walk the corpus rooted at `root`, scoring every pending document.
pub fn analyze_dataset<S: SentimentScorer>(scorer: &S, root: &Path) -> Result<WalkReport> {
    walk_dataset(root, scorer)
}

/// Survey corpus progress without any scoring calls.
pub fn dataset_stats(root: &Path) -> Result<CorpusStats> {
    collect_stats(root)
}
