//! Error types for taxonomy-links
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::TermSourceError;
use crate::domain::services::FlattenError;
use crate::domain::value_objects::InvalidVocabularyId;

/// Result type alias for taxonomy-links operations
pub type LinksResult<T> = Result<T, LinksError>;

/// Main error type for taxonomy-links operations
#[derive(Error, Debug)]
pub enum LinksError {
    /// Depth sequence could not be nested
    #[error(transparent)]
    Flatten(#[from] FlattenError),

    /// Term source failed
    #[error(transparent)]
    Source(#[from] TermSourceError),

    /// Bad vocabulary machine name
    #[error(transparent)]
    VocabularyId(#[from] InvalidVocabularyId),

    /// No vocabulary configured for a build
    #[error("no vocabulary configured - pass --vocabulary or set block.vocabulary in {}", hint.display())]
    MissingVocabulary { hint: PathBuf },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Link route pattern without a term placeholder
    #[error("link pattern '{pattern}' must contain {{tid}}")]
    InvalidLinkPattern { pattern: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
