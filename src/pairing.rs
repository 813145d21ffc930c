use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default file naming convention:
/// `<2-char prefix>_<Entity_Name>_<YYYY>_<tag>.txt`, e.g. `MD_Acme_Corp_2019_tfidf.txt`.
pub const DEFAULT_PATTERN: &str =
    r"^[^_]{2}_(?P<entity>.+)_(?P<year>\d{4})_(?:tfidf|freq)\.txt$";

/// Entity and year decoded from a file name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId {
    /// Entity name with underscores removed
    pub entity: String,
    pub year: u32,
}

impl DocumentId {
    pub fn new(entity: impl Into<String>, year: u32) -> Self {
        Self { entity: entity.into(), year }
    }

    /// Same entity, exactly one year later than `earlier`
    #[inline]
    pub fn is_successor_of(&self, earlier: &DocumentId) -> bool {
        self.entity == earlier.entity && earlier.year.checked_add(1) == Some(self.year)
    }

    /// `EntityYear` label used in the result files
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.entity, self.year)
    }
}

/// Two comparable documents: same entity, consecutive years
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPair<'a> {
    pub earlier_name: &'a str,
    pub later_name: &'a str,
    pub earlier: DocumentId,
    pub later: DocumentId,
}

impl DocumentPair<'_> {
    /// Result label, keyed by the later year
    pub fn label(&self) -> String {
        self.later.label()
    }
}

/// File name → (entity, year) decoder
///
/// The pattern must define the named groups `entity` and `year`; file names
/// that do not match are rejected with [`Error::Parse`] instead of being
/// sliced blindly.
#[derive(Debug, Clone)]
pub struct NamingScheme {
    pattern: Regex,
}

impl Default for NamingScheme {
    fn default() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_PATTERN).expect("default naming pattern is valid"),
        }
    }
}

impl NamingScheme {
    /// Build a scheme from a custom pattern
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| Error::Pattern(e.to_string()))?;
        let names: Vec<&str> = pattern.capture_names().flatten().collect();
        for required in ["entity", "year"] {
            if !names.contains(&required) {
                return Err(Error::Pattern(format!("missing named group `{required}`")));
            }
        }
        Ok(Self { pattern })
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// Decode one identifier
    pub fn parse(&self, identifier: &str) -> Result<DocumentId> {
        let parse_err = |reason: &str| Error::Parse {
            identifier: identifier.to_string(),
            reason: reason.to_string(),
        };
        let caps = self
            .pattern
            .captures(identifier)
            .ok_or_else(|| parse_err("does not match the naming pattern"))?;
        let entity: String = caps
            .name("entity")
            .map(|m| m.as_str().chars().filter(|&c| c != '_').collect())
            .unwrap_or_default();
        if entity.is_empty() {
            return Err(parse_err("empty entity name"));
        }
        let year = caps
            .name("year")
            .ok_or_else(|| parse_err("no year"))?
            .as_str()
            .parse::<u32>()
            .map_err(|e| parse_err(&format!("year is not numeric: {e}")))?;
        Ok(DocumentId { entity, year })
    }

    /// Comparable pairs among neighbouring entries of an ordered listing
    ///
    /// Only position `i` against `i + 1` is checked, so the listing order decides
    /// which pairs can ever be found; callers sort the listing first. A
    /// neighbour that fails to parse yields an `Err` for that comparison and the
    /// scan continues. Neighbours of different entities or with a year gap other
    /// than exactly one are skipped silently.
    pub fn adjacent_pairs<'a, S>(&self, listing: &'a [S]) -> Vec<Result<DocumentPair<'a>>>
    where
        S: AsRef<str>,
    {
        listing
            .windows(2)
            .filter_map(|w| {
                let (first, second) = (w[0].as_ref(), w[1].as_ref());
                let earlier = match self.parse(first) {
                    Ok(id) => id,
                    Err(e) => return Some(Err(e)),
                };
                let later = match self.parse(second) {
                    Ok(id) => id,
                    Err(e) => return Some(Err(e)),
                };
                later.is_successor_of(&earlier).then(|| {
                    Ok(DocumentPair {
                        earlier_name: first,
                        later_name: second,
                        earlier,
                        later,
                    })
                })
            })
            .collect()
    }
}
