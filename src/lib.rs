//! This crate turns a corpus of plain-text documents into TF-IDF vectors and
//! compares consecutive-year documents of the same entity.

pub mod config;
pub mod error;
pub mod pairing;
pub mod pipeline;
pub mod utils;
pub mod vectorizer;

/// Tokenizer
/// Normalizes raw text into lowercase word tokens.
/// ASCII punctuation, ASCII digits and a fixed denylist of typographic symbols
/// are removed before splitting on whitespace.
pub use vectorizer::tokenizer::Tokenizer;

/// Term Frequency structure
/// Raw count of each word within one document.
/// Terms keep their first-encounter order.
pub use vectorizer::term::TermFrequency;

/// Corpus for TF-IDF computation
/// `CorpusBuilder` folds every document's vocabulary into a document-frequency
/// map; `finish` seals it into a read-only `Corpus`.
///
/// Only a finished `Corpus` can be handed to a `TFIDFEngine`, so IDF values
/// always see the final document counts.
pub use vectorizer::corpus::{Corpus, CorpusBuilder};

/// TF IDF Calculation Engine Trait
/// `DefaultTFIDFEngine` weights each term by raw count × ln(N / df) and drops
/// terms the corpus never saw.
///
/// Supported weight types:
/// - f32
/// - f64
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine, TFIDFVector};

/// Vector comparison
/// Cosine similarity over sparse TF-IDF vectors. A zero-magnitude vector has
/// similarity 0.0 with everything.
pub use vectorizer::compute::compare::{Compare, DefaultCompare};

/// File naming convention and year-over-year pairing
pub use pairing::{DocumentId, DocumentPair, NamingScheme};

pub use config::Config;
pub use error::{Error, Result};
