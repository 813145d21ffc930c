//! Flat `key: value` text files, one entry per line.

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use num::Float;

use crate::error::{Error, Result};
use crate::vectorizer::tfidf::TFIDFVector;

/// Decimal places of every persisted real value
pub const DECIMALS: usize = 6;

/// Write `key: value` lines in iteration order
///
/// # Arguments
/// * `path` - destination, truncated if it exists
/// * `entries` - keys and already formatted values
fn write_lines<I, K, V>(path: &Path, entries: I) -> Result<()>
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    let persist = |source| Error::Persist { path: path.to_path_buf(), source };
    let file = File::create(path).map_err(persist)?;
    let mut writer = BufWriter::new(file);
    for (key, value) in entries {
        writeln!(writer, "{key}: {value}").map_err(persist)?;
    }
    writer.flush().map_err(persist)
}

/// Write integer counts, `word: count`
pub fn write_counts<'a, I>(path: &Path, entries: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    write_lines(path, entries)
}

/// Write real values with six decimals, `key: 0.123456`
pub fn write_reals<I, K, N>(path: &Path, entries: I) -> Result<()>
where
    I: IntoIterator<Item = (K, N)>,
    K: Display,
    N: Into<f64>,
{
    write_lines(
        path,
        entries
            .into_iter()
            .map(|(k, v)| (k, format!("{:.*}", DECIMALS, v.into()))),
    )
}

/// Parse `key: value` lines
///
/// A line must split on `:` into exactly a key and a value, and the value must
/// parse as `V`; anything else is [`Error::MalformedLine`]. Blank lines are
/// ignored.
pub fn parse_lines<V>(path: &Path, content: &str) -> Result<Vec<(String, V)>>
where
    V: FromStr,
{
    let mut entries = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let malformed = || Error::MalformedLine {
            path: path.to_path_buf(),
            line_no: idx + 1,
            line: raw.to_string(),
        };
        let mut parts = line.split(':');
        let (key, value) = match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => (key.trim(), value.trim()),
            _ => return Err(malformed()),
        };
        let value = value.parse::<V>().map_err(|_| malformed())?;
        entries.push((key.to_string(), value));
    }
    Ok(entries)
}

/// Read a `key: value` file
pub fn read_entries<V>(path: &Path) -> Result<Vec<(String, V)>>
where
    V: FromStr,
{
    let content = fs::read_to_string(path).map_err(|source| Error::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_lines(path, &content)
}

/// Load a persisted TF-IDF vector
pub fn read_tfidf<N>(path: &Path) -> Result<TFIDFVector<N>>
where
    N: Float + Into<f64> + FromStr,
{
    let entries = read_entries::<N>(path)?;
    Ok(entries.iter().map(|(k, v)| (k.as_str(), *v)).collect())
}
