//! Domain Entities
//!
//! - `TermRecord` - One row of a depth-tagged tree query
//! - `Vocabulary` - A set of terms with their parent hierarchy
//! - `ItemList` - The nested link list produced by flattening

mod item_list;
mod term;
mod vocabulary;

pub use item_list::{ItemKind, ItemList, LinkItem, ListNode, Preorder};
pub use term::TermRecord;
pub use vocabulary::{Vocabulary, VocabularyTerm};
