use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::pairing::NamingScheme;
use crate::pipeline::{ScoreTable, ScoredOutput, StageReport};
use crate::utils::{flat_file, fs as ufs};
use crate::vectorizer::tfidf::TFIDFVector;

/// Length results file inside the result directory
pub const LENGTHS_FILE: &str = "lengths.txt";

/// Sum of the weights of every vector file in `vector_dir`
///
/// Normally pointed at the TF-IDF directory; any directory of `word: number`
/// files following the naming scheme works, e.g. the term-frequency one for
/// raw token counts.
pub fn run_lengths(scheme: &NamingScheme, vector_dir: &Path, result_dir: &Path) -> Result<ScoredOutput> {
    ufs::ensure_dir(result_dir)?;
    let files = ufs::list_files(vector_dir, "txt")?;
    let mut report = StageReport::new("lengths");
    let mut scores = ScoreTable::default();

    for path in &files {
        let id = match scheme.parse(&ufs::file_name(path)) {
            Ok(id) => id,
            Err(e) => {
                report.record_failure(e);
                continue;
            }
        };
        let vec: TFIDFVector<f64> = match flat_file::read_tfidf(path) {
            Ok(vec) => vec,
            Err(e) => {
                report.record_failure(e);
                continue;
            }
        };
        let length = vec.length();
        let label = id.label();
        info!("Length of {label}: {length:.6}");
        scores.insert(label, length);
        report.processed += 1;
    }

    if let Err(e) = flat_file::write_reals(&result_dir.join(LENGTHS_FILE), scores.iter().map(|(k, &v)| (k, v))) {
        report.record_failure(e);
    } else {
        info!(documents = scores.len(), "saved lengths");
    }
    Ok(ScoredOutput { report, scores })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::error::Error;

    #[test]
    fn sums_weights_per_document() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("tfidf");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("MD_Acme_Corp_2019_tfidf.txt"), "a: 0.500000\nb: 1.250000\n").unwrap();
        fs::write(dir.join("MD_Acme_Corp_2020_tfidf.txt"), "").unwrap();
        fs::write(dir.join("MD_Bolt_2021_tfidf.txt"), "z: 2.000000\n").unwrap();
        let result = root.path().join("result");

        let out = run_lengths(&NamingScheme::default(), &dir, &result).unwrap();
        assert!(out.report.is_clean());
        assert_eq!(out.report.processed, 3);
        assert_eq!(
            fs::read_to_string(result.join(LENGTHS_FILE)).unwrap(),
            "AcmeCorp2019: 1.750000\nAcmeCorp2020: 0.000000\nBolt2021: 2.000000\n"
        );
    }

    #[test]
    fn bad_names_and_bad_lines_are_skipped() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("freq");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("global_document_frequency.txt"), "a: 2\n").unwrap();
        fs::write(dir.join("MD_Acme_2019_freq.txt"), "a: 2\nb: 1\n").unwrap();
        fs::write(dir.join("MD_Acme_2020_freq.txt"), "a 2\n").unwrap();

        let out = run_lengths(&NamingScheme::default(), &dir, &root.path().join("r")).unwrap();
        assert_eq!(out.report.failures.len(), 2);
        assert!(out.report.failures.iter().any(|e| matches!(e, Error::Parse { .. })));
        assert!(out.report.failures.iter().any(|e| matches!(e, Error::MalformedLine { .. })));
        assert_eq!(out.scores.get("Acme2019"), Some(&3.0));
    }

    #[test]
    fn unwritable_lengths_file_keeps_scores() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("tfidf");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("MD_Acme_2019_tfidf.txt"), "a: 1.500000\n").unwrap();
        let result = root.path().join("result");
        fs::create_dir_all(result.join(LENGTHS_FILE)).unwrap();

        let out = run_lengths(&NamingScheme::default(), &dir, &result).unwrap();
        assert_eq!(out.report.processed, 1);
        assert_eq!(out.report.failures.len(), 1);
        assert!(matches!(out.report.failures[0], Error::Persist { .. }));
        assert_eq!(out.scores.get("Acme2019"), Some(&1.5));
    }
}
