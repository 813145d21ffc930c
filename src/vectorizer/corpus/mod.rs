use ahash::RandomState;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::TermFrequency;

/// Accumulates document frequencies over one corpus pass.
///
/// Every added document bumps the count of each distinct term it contains by
/// exactly one, regardless of how often the term occurs. Call [`finish`] once
/// every document has been folded in to obtain the read-only [`Corpus`].
///
/// [`finish`]: CorpusBuilder::finish
#[derive(Debug, Default, Clone)]
pub struct CorpusBuilder {
    doc_num: u64,
    term_counts: IndexMap<String, u64, RandomState>,
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: IndexMap::with_hasher(RandomState::new()),
        }
    }

    /// Add a document's vocabulary to the corpus
    /// An empty document still counts toward the document total.
    pub fn add_doc(&mut self, doc: &TermFrequency) -> &mut Self {
        self.doc_num += 1;
        for term in doc.term_set_iter() {
            if let Some(count) = self.term_counts.get_mut(term) {
                *count += 1;
            } else {
                self.term_counts.insert(term.to_string(), 1);
            }
        }
        self
    }

    /// Fold a whole corpus into this builder
    pub fn fold<'a, I>(mut self, docs: I) -> Self
    where
        I: IntoIterator<Item = &'a TermFrequency>,
    {
        for doc in docs {
            self.add_doc(doc);
        }
        self
    }

    /// Documents folded in so far
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Seal the pass
    pub fn finish(self) -> Corpus {
        Corpus {
            doc_num: self.doc_num,
            term_counts: self.term_counts,
        }
    }
}

/// Document-frequency statistics of a completed corpus pass.
///
/// Only obtainable from [`CorpusBuilder::finish`] (or by deserializing a
/// previously finished corpus), so IDF values are never computed from a
/// partial pass.
///
/// # Examples
/// ```
/// use tf_idf_corpus::{Corpus, TermFrequency};
/// let docs: Vec<TermFrequency> = vec![
///     [("a", 2), ("b", 1)].into_iter().collect(),
///     [("a", 1), ("c", 3)].into_iter().collect(),
/// ];
/// let corpus = Corpus::from_docs(&docs);
/// assert_eq!(corpus.doc_num(), 2);
/// assert_eq!(corpus.doc_freq("a"), Some(2));
/// assert_eq!(corpus.doc_freq("c"), Some(1));
/// ```
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Corpus {
    doc_num: u64,
    term_counts: IndexMap<String, u64, RandomState>,
}

impl Corpus {
    /// Run a full pass over `docs`
    pub fn from_docs<'a, I>(docs: I) -> Self
    where
        I: IntoIterator<Item = &'a TermFrequency>,
    {
        CorpusBuilder::new().fold(docs).finish()
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of documents containing `term`, `None` if the pass never saw it
    #[inline]
    pub fn doc_freq(&self, term: &str) -> Option<u64> {
        self.term_counts.get(term).copied()
    }

    /// Natural-log IDF of `term`, `None` if the pass never saw it
    #[inline]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.doc_freq(term)
            .map(|df| (self.doc_num as f64 / df as f64).ln())
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// Terms with their document frequency, in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_counts.iter().map(|(term, &count)| (term.as_str(), count))
    }
}

impl From<&Corpus> for TermFrequency {
    /// Document frequencies viewed as counts, for analysis
    fn from(corpus: &Corpus) -> Self {
        corpus.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tf(pairs: &[(&str, u64)]) -> TermFrequency {
        pairs.iter().copied().collect()
    }

    #[test]
    fn counts_presence_not_magnitude() {
        let docs = vec![tf(&[("a", 2), ("b", 1)]), tf(&[("a", 1), ("c", 3)])];
        let corpus = Corpus::from_docs(&docs);
        assert_eq!(corpus.doc_num(), 2);
        assert_eq!(corpus.doc_freq("a"), Some(2));
        assert_eq!(corpus.doc_freq("b"), Some(1));
        assert_eq!(corpus.doc_freq("c"), Some(1));
        assert_eq!(corpus.doc_freq("zzz"), None);
        assert_eq!(corpus.vocab_size(), 3);
    }

    #[test]
    fn empty_documents_still_count() {
        let docs = vec![tf(&[("a", 1)]), TermFrequency::new()];
        let corpus = Corpus::from_docs(&docs);
        assert_eq!(corpus.doc_num(), 2);
        assert_eq!(corpus.doc_freq("a"), Some(1));
    }

    #[test]
    fn builder_and_fold_agree() {
        let docs = vec![tf(&[("x", 1)]), tf(&[("x", 4), ("y", 1)]), tf(&[("y", 2)])];
        let mut builder = CorpusBuilder::new();
        for d in &docs {
            builder.add_doc(d);
        }
        assert_eq!(builder.doc_num(), 3);
        let a = builder.finish();
        let b = CorpusBuilder::new().fold(&docs).finish();
        assert_eq!(a.iter().collect::<Vec<_>>(), b.iter().collect::<Vec<_>>());
        assert_eq!(a.doc_num(), b.doc_num());
    }

    #[test]
    fn idf_of_lone_document_is_zero() {
        let docs = vec![tf(&[("solo", 3), ("word", 1)])];
        let corpus = Corpus::from_docs(&docs);
        assert_eq!(corpus.doc_num(), 1);
        assert_eq!(corpus.doc_freq("solo"), Some(1));
        assert_eq!(corpus.idf("solo"), Some(0.0));
        assert_eq!(corpus.idf("word"), Some(0.0));
    }

    #[test]
    fn idf_values() {
        let docs = vec![tf(&[("a", 2), ("b", 1)]), tf(&[("a", 1)])];
        let corpus = Corpus::from_docs(&docs);
        assert_eq!(corpus.idf("a"), Some(0.0));
        assert!((corpus.idf("b").unwrap() - std::f64::consts::LN_2).abs() < 1e-12);
        assert_eq!(corpus.idf("missing"), None);
    }

    #[test]
    fn into_term_frequency() {
        let docs = vec![tf(&[("a", 2)]), tf(&[("a", 1), ("b", 1)])];
        let corpus = Corpus::from_docs(&docs);
        let as_tf: TermFrequency = (&corpus).into();
        assert_eq!(as_tf.term_count("a"), 2);
        assert_eq!(as_tf.term_count("b"), 1);
    }

    #[test]
    fn serde_roundtrip_json() {
        let docs = vec![tf(&[("a", 2), ("b", 1)]), tf(&[("a", 1)])];
        let corpus = Corpus::from_docs(&docs);
        let s = serde_json::to_string(&corpus).unwrap();
        let de: Corpus = serde_json::from_str(&s).unwrap();
        assert_eq!(de.doc_num(), 2);
        assert_eq!(de.iter().collect::<Vec<_>>(), corpus.iter().collect::<Vec<_>>());
    }
}
