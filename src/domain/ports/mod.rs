//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod link_builder;
pub mod term_source;

pub use link_builder::LinkItemBuilder;
pub use term_source::{TermRecordSource, TermSourceError, TermSourceResult};
