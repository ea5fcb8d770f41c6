//! Indented Links Use Case
//!
//! Loads a vocabulary subtree and turns it into a nested link list.

use crate::domain::ports::{LinkItemBuilder, TermRecordSource};
use crate::domain::services::TreeFlattener;
use crate::domain::value_objects::BlockSettings;
use crate::error::LinksResult;

use super::result::IndentedLinks;

/// Indented links use case - the block build flow
pub struct IndentedLinksUseCase<S, B>
where
    S: TermRecordSource,
    B: LinkItemBuilder,
{
    source: S,
    flattener: TreeFlattener<B>,
}

impl<S, B> IndentedLinksUseCase<S, B>
where
    S: TermRecordSource,
    B: LinkItemBuilder,
{
    pub fn new(source: S, builder: B) -> Self {
        Self {
            source,
            flattener: TreeFlattener::new(builder),
        }
    }

    /// Build the nested list for `settings`
    ///
    /// An empty vocabulary (or an unknown parent) yields an empty result,
    /// which callers should render as nothing.
    pub fn execute(&self, settings: &BlockSettings) -> LinksResult<IndentedLinks> {
        let records =
            self.source
                .load_tree(&settings.vocabulary, settings.parent, settings.max_depth)?;

        log::info!(
            "building links for vocabulary '{}' ({} terms)",
            settings.vocabulary,
            records.len()
        );

        let items = self.flattener.flatten_relative(&records)?;

        Ok(IndentedLinks {
            vocabulary: settings.vocabulary.clone(),
            parent: settings.parent,
            term_count: records.len(),
            items,
        })
    }
}
