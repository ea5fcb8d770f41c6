//! `vocabularies` command

use std::path::Path;

use anyhow::{Context, Result};

use taxonomy_links::config::LoadedConfig;
use taxonomy_links::infrastructure::FsVocabularyRepository;

pub fn cmd_vocabularies(loaded: &LoadedConfig, dir: Option<&Path>) -> Result<()> {
    let dir = dir.unwrap_or(loaded.config.source.vocabularies.as_path());
    let repository = FsVocabularyRepository::new(dir);
    let vocabularies = repository
        .list()
        .with_context(|| format!("failed to read vocabulary directory {}", dir.display()))?;

    if vocabularies.is_empty() {
        log::warn!("no vocabularies found in {}", dir.display());
    }

    for vocabulary in &vocabularies {
        println!(
            "{}\t{}\t{} terms",
            vocabulary.vid,
            vocabulary.name,
            vocabulary.terms.len()
        );
    }

    Ok(())
}
