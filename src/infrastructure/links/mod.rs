//! LinkItemBuilder implementations

mod route;

pub use route::{RouteLinkBuilder, DEFAULT_TERM_ROUTE};
