//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod block_settings;
mod term_id;

pub use block_settings::{coerce_term_id, BlockSettings};
pub use term_id::{InvalidVocabularyId, TermId, VocabularyId};
