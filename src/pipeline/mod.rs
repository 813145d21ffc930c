//! Batch stages over directories of documents.
//!
//! Each stage processes its inputs one by one. A failure on a single document
//! or pair is logged, recorded in the stage's [`StageReport`] and skipped;
//! only fatal errors (see [`Error::is_fatal`]) are returned as `Err`.

pub mod extract;
pub mod frequency;
pub mod length;
pub mod similarity;

use ahash::RandomState;
use indexmap::IndexMap;
use tracing::warn;

use crate::error::Error;

pub use extract::{run_extract, TextExtractor};
pub use frequency::{run_frequency, FrequencyOutput, DOC_FREQ_FILE};
pub use length::{run_lengths, LENGTHS_FILE};
pub use similarity::{run_similarity, RESULT_FILE};

/// Label → score, in processing order
pub type ScoreTable = IndexMap<String, f64, RandomState>;

/// What a stage did
#[derive(Debug)]
pub struct StageReport {
    pub stage: &'static str,
    /// Items that went through successfully
    pub processed: usize,
    /// Skipped items
    pub failures: Vec<Error>,
}

impl StageReport {
    pub fn new(stage: &'static str) -> Self {
        Self { stage, processed: 0, failures: Vec::new() }
    }

    /// Log and keep a non-fatal failure
    pub fn record_failure(&mut self, err: Error) {
        warn!(stage = self.stage, kind = err.kind(), "{err}");
        self.failures.push(err);
    }

    #[inline]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Output of the similarity and length stages
#[derive(Debug)]
pub struct ScoredOutput {
    pub report: StageReport,
    pub scores: ScoreTable,
}
