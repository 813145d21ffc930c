use ahash::RandomState;
use indexmap::IndexMap;
use num::Float;
use serde::{Deserialize, Serialize};

use crate::vectorizer::{corpus::Corpus, term::TermFrequency};

/// TF-IDF weights of one document
///
/// Sparse: terms without a weight are simply absent. Iteration follows the
/// term order of the source `TermFrequency`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TFIDFVector<N = f64>
where
    N: Float,
{
    weights: IndexMap<String, N, RandomState>,
}

impl<N> Default for TFIDFVector<N>
where
    N: Float + Into<f64>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> TFIDFVector<N>
where
    N: Float + Into<f64>,
{
    pub fn new() -> Self {
        Self {
            weights: IndexMap::with_hasher(RandomState::new()),
        }
    }

    /// Set the weight of a term, replacing any previous value
    pub fn insert(&mut self, term: &str, weight: N) -> &mut Self {
        self.weights.insert(term.to_string(), weight);
        self
    }

    #[inline]
    pub fn get(&self, term: &str) -> Option<N> {
        self.weights.get(term).copied()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, N)> {
        self.weights.iter().map(|(term, &w)| (term.as_str(), w))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Document length: the plain sum of all weights
    pub fn length(&self) -> f64 {
        self.weights.values().map(|&w| Into::<f64>::into(w)).sum()
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.weights
            .values()
            .map(|&w| {
                let w: f64 = w.into();
                w * w
            })
            .sum::<f64>()
            .sqrt()
    }
}

impl<'a, N> FromIterator<(&'a str, N)> for TFIDFVector<N>
where
    N: Float + Into<f64>,
{
    fn from_iter<I: IntoIterator<Item = (&'a str, N)>>(iter: I) -> Self {
        let mut vec = TFIDFVector::new();
        for (term, w) in iter {
            vec.insert(term, w);
        }
        vec
    }
}

pub trait TFIDFEngine<N>
where
    N: Float,
{
    /// IDF of a term against a finished corpus
    /// # Arguments
    /// * `corpus` - finished corpus pass
    /// * `term` - term
    /// # Returns
    /// * `Option<f64>` - `None` when the corpus never saw the term
    fn idf(corpus: &Corpus, term: &str) -> Option<f64>;

    /// TF-IDF vector of one document
    /// Terms the corpus never saw are dropped.
    /// # Arguments
    /// * `freq` - term frequencies of the document
    /// * `corpus` - finished corpus pass
    fn tfidf_vec(freq: &TermFrequency, corpus: &Corpus) -> TFIDFVector<N>;
}

/// Default TF-IDF engine
/// raw count × ln(N / df), computed in `f64`.
/// Supports `f32` and `f64` weights.
#[derive(Debug)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    pub fn new() -> Self {
        DefaultTFIDFEngine
    }

    #[inline]
    fn weight(count: u64, idf: f64) -> f64 {
        count as f64 * idf
    }
}

impl TFIDFEngine<f64> for DefaultTFIDFEngine {
    #[inline]
    fn idf(corpus: &Corpus, term: &str) -> Option<f64> {
        corpus.idf(term)
    }

    fn tfidf_vec(freq: &TermFrequency, corpus: &Corpus) -> TFIDFVector<f64> {
        let mut vec = TFIDFVector::new();
        for (term, count) in freq.iter() {
            if let Some(idf) = <Self as TFIDFEngine<f64>>::idf(corpus, term) {
                vec.insert(term, Self::weight(count, idf));
            }
        }
        vec
    }
}

impl TFIDFEngine<f32> for DefaultTFIDFEngine {
    #[inline]
    fn idf(corpus: &Corpus, term: &str) -> Option<f64> {
        corpus.idf(term)
    }

    fn tfidf_vec(freq: &TermFrequency, corpus: &Corpus) -> TFIDFVector<f32> {
        let mut vec = TFIDFVector::new();
        for (term, count) in freq.iter() {
            if let Some(idf) = <Self as TFIDFEngine<f32>>::idf(corpus, term) {
                vec.insert(term, Self::weight(count, idf) as f32);
            }
        }
        vec
    }
}
