use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the batch stages.
///
/// Everything except `OutputDir` and `Pattern` is scoped to a single document
/// or a single pair: the stage logs it, records it in its report and moves on.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read source {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse identifier {identifier:?}: {reason}")]
    Parse { identifier: String, reason: String },

    #[error("malformed line {line_no} in {}: {line:?}", .path.display())]
    MalformedLine {
        path: PathBuf,
        line_no: usize,
        line: String,
    },

    #[error("cannot prepare output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to extract text from {}: {message}", .path.display())]
    Extract { path: PathBuf, message: String },

    #[error("invalid naming pattern: {0}")]
    Pattern(String),
}

impl Error {
    /// Whether the error must abort the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::OutputDir { .. } | Error::Pattern(_))
    }

    /// Short stage-level name, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::SourceRead { .. } => "source_read",
            Error::Persist { .. } => "persist",
            Error::Parse { .. } => "parse",
            Error::MalformedLine { .. } => "malformed_line",
            Error::OutputDir { .. } => "output_dir",
            Error::Extract { .. } => "extract",
            Error::Pattern(_) => "pattern",
        }
    }
}
