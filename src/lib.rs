//! taxonomy-links - render taxonomy trees as nested link lists
//!
//! A taxonomy query returns terms as a flat, pre-order sequence where each
//! term carries its depth. This crate turns that sequence into a nested list
//! of links in a single pass, and ships file-backed vocabularies, a route
//! link builder and renderers around that core.
//!
//! ```
//! use taxonomy_links::{RouteLinkBuilder, TermRecord, TreeFlattener};
//!
//! let records = vec![
//!     TermRecord::new(1i64, "Fruit", 0),
//!     TermRecord::new(2i64, "Apple", 1),
//!     TermRecord::new(3i64, "Veg", 0),
//! ];
//! let list = TreeFlattener::new(RouteLinkBuilder::default())
//!     .flatten(&records, 0)
//!     .unwrap();
//! assert_eq!(list.len(), 2);
//! assert!(list.nodes()[0].is_group());
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{IndentedLinks, IndentedLinksUseCase};
pub use config::{Config, OutputFormat};
pub use domain::entities::{
    ItemKind, ItemList, LinkItem, ListNode, TermRecord, Vocabulary, VocabularyTerm,
};
pub use domain::ports::{LinkItemBuilder, TermRecordSource, TermSourceError};
pub use domain::services::{flatten, FlattenError, TreeFlattener};
pub use domain::value_objects::{coerce_term_id, BlockSettings, TermId, VocabularyId};
pub use error::{LinksError, LinksResult};
pub use infrastructure::{FsVocabularyRepository, InMemoryTermSource, RouteLinkBuilder};
