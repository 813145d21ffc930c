use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};
use crate::pipeline::StageReport;
use crate::utils::{flat_file, fs as ufs};
use crate::vectorizer::{
    corpus::{Corpus, CorpusBuilder},
    term::TermFrequency,
    tfidf::{DefaultTFIDFEngine, TFIDFEngine, TFIDFVector},
    tokenizer::Tokenizer,
};

/// Document-frequency file written next to the term-frequency files
pub const DOC_FREQ_FILE: &str = "global_document_frequency.txt";

#[derive(Debug)]
pub struct FrequencyOutput {
    pub report: StageReport,
    /// Statistics of the completed pass
    pub corpus: Corpus,
}

/// Output path of a document's term frequencies
pub fn freq_path(freq_dir: &Path, stem: &str) -> PathBuf {
    freq_dir.join(format!("{stem}_freq.txt"))
}

/// Output path of a document's TF-IDF weights
pub fn tfidf_path(tfidf_dir: &Path, stem: &str) -> PathBuf {
    tfidf_dir.join(format!("{stem}_tfidf.txt"))
}

/// Term frequencies of one document, or why it could not be read
pub fn document_frequency(tokenizer: &Tokenizer, path: &Path) -> Result<TermFrequency> {
    let text = fs::read_to_string(path).map_err(|source| Error::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(TermFrequency::from_text(tokenizer, &text))
}

/// Build term, document and TF-IDF frequency files for every `.txt` in `input_dir`
///
/// Pass one reads every document, writes `<stem>_freq.txt` and folds its
/// vocabulary into the corpus. Pass two starts only once the corpus is sealed
/// and writes `<stem>_tfidf.txt`. Finally the document frequencies go to
/// `global_document_frequency.txt` in `freq_dir`.
///
/// An unreadable document is reported and skipped; it gets no output files
/// but still counts toward the corpus size.
pub fn run_frequency(
    tokenizer: &Tokenizer,
    input_dir: &Path,
    freq_dir: &Path,
    tfidf_dir: &Path,
) -> Result<FrequencyOutput> {
    ufs::ensure_dir(freq_dir)?;
    ufs::ensure_dir(tfidf_dir)?;
    let files = ufs::list_files(input_dir, "txt")?;
    let mut report = StageReport::new("frequency");
    info!(documents = files.len(), dir = %input_dir.display(), "starting frequency pass");

    let mut builder = CorpusBuilder::new();
    let mut readable: Vec<(String, TermFrequency)> = Vec::with_capacity(files.len());
    for path in &files {
        let stem = ufs::file_stem(path);
        let tf = match document_frequency(tokenizer, path) {
            Ok(tf) => tf,
            Err(e) => {
                report.record_failure(e);
                builder.add_doc(&TermFrequency::new());
                continue;
            }
        };
        builder.add_doc(&tf);
        match flat_file::write_counts(&freq_path(freq_dir, &stem), tf.iter()) {
            Ok(()) => info!(file = %ufs::file_name(path), terms = tf.term_num(), "saved frequency"),
            Err(e) => report.record_failure(e),
        }
        readable.push((stem, tf));
    }
    let corpus = builder.finish();
    info!(doc_num = corpus.doc_num(), vocab = corpus.vocab_size(), "corpus pass complete");

    for (stem, tf) in &readable {
        let tfidf: TFIDFVector<f64> = DefaultTFIDFEngine::tfidf_vec(tf, &corpus);
        match flat_file::write_reals(&tfidf_path(tfidf_dir, stem), tfidf.iter()) {
            Ok(()) => {
                report.processed += 1;
                info!(document = %stem, terms = tfidf.len(), "saved tf-idf");
            }
            Err(e) => report.record_failure(e),
        }
    }

    match flat_file::write_counts(&freq_dir.join(DOC_FREQ_FILE), corpus.iter()) {
        Ok(()) => info!(terms = corpus.vocab_size(), "saved global document frequency"),
        Err(e) => report.record_failure(e),
    }

    Ok(FrequencyOutput { report, corpus })
}
