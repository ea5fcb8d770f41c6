//! Indented links: the block build as a use case

mod result;
mod use_case;

pub use result::IndentedLinks;
pub use use_case::IndentedLinksUseCase;
