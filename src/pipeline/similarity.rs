use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::pairing::NamingScheme;
use crate::pipeline::{ScoreTable, ScoredOutput, StageReport};
use crate::utils::{flat_file, fs as ufs};
use crate::vectorizer::{
    compute::compare::{Compare, DefaultCompare},
    tfidf::TFIDFVector,
};

/// Similarity results file inside the result directory
pub const RESULT_FILE: &str = "result.txt";

/// Load two persisted TF-IDF vectors and score them
pub fn compare_files(first: &Path, second: &Path) -> Result<f64> {
    let a: TFIDFVector<f64> = flat_file::read_tfidf(first)?;
    let b: TFIDFVector<f64> = flat_file::read_tfidf(second)?;
    Ok(DefaultCompare::cosine_similarity(&a, &b))
}

/// Cosine similarity of every consecutive-year pair in `tfidf_dir`
///
/// The directory listing is sorted by file name and only neighbouring files
/// are compared. Scores are written to `result.txt` in `result_dir`, one
/// `EntityYear: score` line per pair, keyed by the later year.
pub fn run_similarity(scheme: &NamingScheme, tfidf_dir: &Path, result_dir: &Path) -> Result<ScoredOutput> {
    ufs::ensure_dir(result_dir)?;
    let files = ufs::list_files(tfidf_dir, "txt")?;
    let names: Vec<String> = files.iter().map(|p| ufs::file_name(p)).collect();
    let mut report = StageReport::new("similarity");
    let mut scores = ScoreTable::default();

    for pair in scheme.adjacent_pairs(&names) {
        let pair = match pair {
            Ok(pair) => pair,
            Err(e) => {
                report.record_failure(e);
                continue;
            }
        };
        let score = match compare_files(&tfidf_dir.join(pair.earlier_name), &tfidf_dir.join(pair.later_name)) {
            Ok(score) => score,
            Err(e) => {
                report.record_failure(e);
                continue;
            }
        };
        let label = pair.label();
        info!("Cosine similarity score of {label}: {score:.6}");
        scores.insert(label, score);
        report.processed += 1;
    }

    if let Err(e) = flat_file::write_reals(&result_dir.join(RESULT_FILE), scores.iter().map(|(k, &v)| (k, v))) {
        report.record_failure(e);
    } else {
        info!(pairs = scores.len(), "saved similarity scores");
    }
    Ok(ScoredOutput { report, scores })
}
