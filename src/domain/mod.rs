//! Domain Layer
//!
//! Pure taxonomy-to-list logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Term records, vocabularies and the nested item list
//! - `value_objects/` - Ids and block settings
//! - `services/` - The tree flattener
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - Term loading and link building go through traits

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
