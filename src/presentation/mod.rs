//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/Markdown/HTML/JSON)
//!
//! ## Structure
//!
//! - `cli` - clap definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Renderers for nested link lists

pub mod cli;
mod escaping;
pub mod factory;
pub mod output;

pub use factory::create_indented_links_use_case;
pub use output::{
    create_renderer, HtmlRenderer, ItemListRenderer, JsonRenderer, MarkdownRenderer, TextRenderer,
};
