//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Term sources (vocabulary files, in-memory)
//! - `links/` - Link builders (route patterns)
//! - `fs/` - Atomic file output

pub mod fs;
pub mod links;
pub mod repositories;

pub use fs::atomic_write;
pub use links::{RouteLinkBuilder, DEFAULT_TERM_ROUTE};
pub use repositories::{FsVocabularyRepository, InMemoryTermSource};
