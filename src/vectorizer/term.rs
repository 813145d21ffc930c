use ahash::RandomState;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vectorizer::tokenizer::Tokenizer;

/// TermFrequency struct
/// Raw occurrence count of every word in one document.
///
/// Terms keep their first-encounter order, so writing the same document twice
/// produces the same file.
///
/// # Examples
/// ```
/// use tf_idf_corpus::{TermFrequency, Tokenizer};
/// let term_freq = TermFrequency::from_text(&Tokenizer::new(), "a a b");
///
/// assert_eq!(term_freq.term_count("a"), 2);
/// assert_eq!(term_freq.term_count("b"), 1);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TermFrequency {
    term_count: IndexMap<String, u64, RandomState>,
    total_term_count: u64,
}

impl PartialEq for TermFrequency {
    fn eq(&self, other: &Self) -> bool {
        // order-insensitive
        self.total_term_count == other.total_term_count
            && self.term_count.len() == other.term_count.len()
            && self.iter().all(|(term, count)| other.term_count(term) == count)
    }
}

/// Implementation for adding terms
impl TermFrequency {
    /// Create a new TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::with_hasher(RandomState::new()),
            total_term_count: 0,
        }
    }

    /// Tokenize a document and count its terms
    ///
    /// # Arguments
    /// * `tokenizer` - tokenizer used to split the text
    /// * `text` - raw document text
    pub fn from_text(tokenizer: &Tokenizer, text: &str) -> Self {
        let mut tf = TermFrequency::new();
        tf.add_terms(&tokenizer.tokenize(text));
        tf
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        if let Some(count) = self.term_count.get_mut(term) {
            *count += 1;
        } else {
            self.term_count.insert(term.to_string(), 1);
        }
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - Slice of terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Set the occurrence count for a term
    /// A count of 0 removes the term.
    ///
    /// # Arguments
    /// * `term` - term
    /// * `count` - Occurrence count
    pub fn set_term_count(&mut self, term: &str, count: u64) -> &mut Self {
        if count == 0 {
            if let Some(old) = self.term_count.shift_remove(term) {
                self.total_term_count -= old;
            }
        } else {
            let current_count = self.term_count.entry(term.to_string()).or_insert(0);
            self.total_term_count = self.total_term_count - *current_count + count;
            *current_count = count;
        }
        self
    }
}

impl<T> From<&[T]> for TermFrequency
where
    T: AsRef<str>,
{
    fn from(terms: &[T]) -> Self {
        let mut tf = TermFrequency::new();
        tf.add_terms(terms);
        tf
    }
}

impl<'a> FromIterator<(&'a str, u64)> for TermFrequency {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        let mut tf = TermFrequency::new();
        for (term, count) in iter {
            tf.set_term_count(term, count);
        }
        tf
    }
}

/// Implementation for retrieving information from TermFrequency
impl TermFrequency {
    /// Get iterator over all terms and their counts
    ///
    /// # Returns
    /// * `impl Iterator<Item=(&str, u64)>` - Iterator over terms and their counts
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Get the total count of all terms
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Get the occurrence count for a specific term
    ///
    /// # Arguments
    /// * `term` - term
    ///
    /// # Returns
    /// * `u64` - Occurrence count for the term, 0 if absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        *self.term_count.get(term).unwrap_or(&0)
    }

    /// Check if a term exists
    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// Iterator over the distinct terms of the document
    #[inline]
    pub fn term_set_iter(&self) -> impl Iterator<Item = &str> {
        self.term_count.keys().map(|s| s.as_str())
    }

    /// Get the set of terms
    #[inline]
    pub fn term_set(&self) -> Vec<String> {
        self.term_count.keys().cloned().collect()
    }

    /// Get the number of unique terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    /// Get a vector of terms sorted by frequency (descending)
    /// Ties keep encounter order.
    ///
    /// # Returns
    /// * `Vec<(String, u64)>` - Vector of terms sorted by frequency
    #[inline]
    pub fn sorted_frequency_vector(&self) -> Vec<(String, u64)> {
        let mut term_list: Vec<(String, u64)> = self.term_count
            .iter()
            .map(|(term, &count)| (term.clone(), count))
            .collect();

        term_list.sort_by(|a, b| b.1.cmp(&a.1));
        term_list
    }

    /// Get a vector of terms sorted by dictionary order (ascending)
    ///
    /// # Returns
    /// * `Vec<(String, u64)>` - Vector of terms sorted by dictionary order
    #[inline]
    pub fn sorted_dict_order_vector(&self) -> Vec<(String, u64)> {
        let mut term_list: Vec<(String, u64)> = self.term_count
            .iter()
            .map(|(term, &count)| (term.clone(), count))
            .collect();

        term_list.sort_by(|a, b| a.0.cmp(&b.0));
        term_list
    }
}
