//! Repository implementations of the TermRecordSource port

mod memory;
mod vocabulary;

pub use memory::InMemoryTermSource;
pub use vocabulary::{parse_vocabulary_file, FsVocabularyRepository};
