//! In-memory term source
//!
//! Holds vocabularies directly; useful for embedding and tests.

use std::collections::BTreeMap;

use crate::domain::entities::{TermRecord, Vocabulary};
use crate::domain::ports::{TermRecordSource, TermSourceError, TermSourceResult};
use crate::domain::value_objects::{TermId, VocabularyId};

#[derive(Debug, Clone, Default)]
pub struct InMemoryTermSource {
    vocabularies: BTreeMap<VocabularyId, Vocabulary>,
}

impl InMemoryTermSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a vocabulary
    pub fn insert(&mut self, vocabulary: Vocabulary) {
        self.vocabularies.insert(vocabulary.vid.clone(), vocabulary);
    }

    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.insert(vocabulary);
        self
    }

    pub fn vocabularies(&self) -> impl Iterator<Item = &Vocabulary> {
        self.vocabularies.values()
    }
}

impl TermRecordSource for InMemoryTermSource {
    fn load_tree(
        &self,
        vocabulary: &VocabularyId,
        parent: Option<TermId>,
        max_depth: Option<usize>,
    ) -> TermSourceResult<Vec<TermRecord>> {
        self.vocabularies
            .get(vocabulary)
            .map(|v| v.load_tree(parent, max_depth))
            .ok_or_else(|| TermSourceError::VocabularyNotFound {
                vid: vocabulary.clone(),
                location: "memory".to_string(),
            })
    }
}
