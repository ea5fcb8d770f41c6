//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `IndentedLinksUseCase` - Load a vocabulary subtree and nest it as links

pub mod indented_links;

pub use indented_links::{IndentedLinks, IndentedLinksUseCase};
