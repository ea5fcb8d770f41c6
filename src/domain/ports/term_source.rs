//! TermRecordSource port - abstraction for taxonomy tree queries
//!
//! The flattener only needs an ordered, depth-tagged sequence of terms.
//! Where the sequence comes from (files, memory, a database) is left to the
//! infrastructure layer.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::TermRecord;
use crate::domain::value_objects::{TermId, VocabularyId};

/// Result type for term source operations
pub type TermSourceResult<T> = Result<T, TermSourceError>;

/// Term source errors
#[derive(Debug, Error)]
pub enum TermSourceError {
    /// No vocabulary with this id exists in the source
    #[error("vocabulary '{vid}' not found in {location}")]
    VocabularyNotFound { vid: VocabularyId, location: String },

    /// The vocabulary exists but could not be parsed
    #[error("invalid vocabulary file {}: {message}", file.display())]
    InvalidVocabulary { file: PathBuf, message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Supplies depth-tagged term sequences
///
/// Implementations must return records in pre-order depth-first order with
/// depth 0 for the direct children of `parent` (or for every top-level term
/// when `parent` is `None`).
pub trait TermRecordSource: Send + Sync {
    /// All descendants of `parent` within `vocabulary`
    fn load_tree(
        &self,
        vocabulary: &VocabularyId,
        parent: Option<TermId>,
        max_depth: Option<usize>,
    ) -> TermSourceResult<Vec<TermRecord>>;
}

impl<T: TermRecordSource + ?Sized> TermRecordSource for &T {
    fn load_tree(
        &self,
        vocabulary: &VocabularyId,
        parent: Option<TermId>,
        max_depth: Option<usize>,
    ) -> TermSourceResult<Vec<TermRecord>> {
        (**self).load_tree(vocabulary, parent, max_depth)
    }
}
