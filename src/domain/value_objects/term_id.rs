//! Identifier value objects - term ids and vocabulary machine names

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Numeric identifier of a taxonomy term
///
/// Zero is reserved: in vocabulary files a parent of `0` means "no parent".
/// Ids are signed so a coerced parent like `-4` stays a real (unmatched) id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermId(i64);

impl TermId {
    /// Create a term id
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw numeric value
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns true for the reserved root id `0`
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }
}

impl From<i64> for TermId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TermId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

/// Rejected vocabulary machine name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid vocabulary id '{0}': use letters, digits, '_' or '-'")]
pub struct InvalidVocabularyId(pub String);

/// Machine name of a vocabulary (e.g. `tags`)
///
/// Vocabulary ids double as file stems in a vocabulary directory, so anything
/// that could walk out of that directory is rejected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VocabularyId(String);

impl VocabularyId {
    /// Validate and wrap a machine name
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidVocabularyId> {
        let id = id.into();
        let trimmed = id.trim();
        let valid = !trimmed.is_empty()
            && trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if valid {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(InvalidVocabularyId(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VocabularyId {
    type Error = InvalidVocabularyId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VocabularyId> for String {
    fn from(id: VocabularyId) -> Self {
        id.0
    }
}

impl FromStr for VocabularyId {
    type Err = InvalidVocabularyId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for VocabularyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
