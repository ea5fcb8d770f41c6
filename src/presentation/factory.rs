//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::IndentedLinksUseCase;
use crate::config::Config;
use crate::error::LinksResult;
use crate::infrastructure::{FsVocabularyRepository, RouteLinkBuilder};

/// Type alias for the concrete use case backed by vocabulary files
pub type ConcreteIndentedLinksUseCase =
    IndentedLinksUseCase<FsVocabularyRepository, RouteLinkBuilder>;

/// Create an indented links use case reading vocabularies from `dir`
pub fn create_indented_links_use_case(
    dir: &Path,
    config: &Config,
) -> LinksResult<ConcreteIndentedLinksUseCase> {
    let repository = FsVocabularyRepository::new(dir);
    let builder = config.link_builder()?;
    Ok(IndentedLinksUseCase::new(repository, builder))
}
