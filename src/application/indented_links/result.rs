//! Indented links result

use serde::Serialize;

use crate::domain::entities::ItemList;
use crate::domain::value_objects::{TermId, VocabularyId};

/// Outcome of one block build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndentedLinks {
    pub vocabulary: VocabularyId,
    pub parent: Option<TermId>,
    /// Number of records the term source returned
    pub term_count: usize,
    pub items: ItemList,
}

impl IndentedLinks {
    /// Nothing to render
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
