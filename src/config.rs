use std::env;
use std::path::PathBuf;

use crate::error::Result;
use crate::pairing::NamingScheme;

/// Directory layout and naming convention of a run.
///
/// Values come from `TFIDF_*` environment variables (a `.env` file is loaded
/// by the binary before this runs); command-line flags override them.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// PDF sources for `extract`
    pub pdf_dir: PathBuf,
    /// Plain-text documents, output of `extract` and input of `frequency`
    pub text_dir: PathBuf,
    /// `<stem>_freq.txt` files and the global document frequency
    pub freq_dir: PathBuf,
    /// `<stem>_tfidf.txt` files
    pub tfidf_dir: PathBuf,
    /// `result.txt` and `lengths.txt`
    pub result_dir: PathBuf,
    /// Custom file naming regex, `None` for the default convention
    pub name_pattern: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pdf_dir: PathBuf::from("./data/pdf"),
            text_dir: PathBuf::from("./data/text"),
            freq_dir: PathBuf::from("./data/frequency"),
            tfidf_dir: PathBuf::from("./data/tfidf"),
            result_dir: PathBuf::from("./data/result"),
            name_pattern: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let path = |key: &str, default: PathBuf| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(default)
        };
        Self {
            pdf_dir: path("TFIDF_PDF_DIR", defaults.pdf_dir),
            text_dir: path("TFIDF_TEXT_DIR", defaults.text_dir),
            freq_dir: path("TFIDF_FREQ_DIR", defaults.freq_dir),
            tfidf_dir: path("TFIDF_TFIDF_DIR", defaults.tfidf_dir),
            result_dir: path("TFIDF_RESULT_DIR", defaults.result_dir),
            name_pattern: lookup("TFIDF_NAME_PATTERN").filter(|v| !v.trim().is_empty()),
        }
    }

    /// Compile the naming scheme
    pub fn naming_scheme(&self) -> Result<NamingScheme> {
        match &self.name_pattern {
            Some(pattern) => NamingScheme::new(pattern),
            None => Ok(NamingScheme::default()),
        }
    }
}
