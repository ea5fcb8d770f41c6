//! `records` command: dump the depth-tagged sequence a render consumes

use anyhow::{Context, Result};

use taxonomy_links::config::LoadedConfig;
use taxonomy_links::domain::ports::TermRecordSource;
use taxonomy_links::infrastructure::FsVocabularyRepository;
use taxonomy_links::presentation::cli::SourceArgs;

pub fn cmd_records(loaded: &LoadedConfig, source: &SourceArgs) -> Result<()> {
    let config = super::with_source_args(&loaded.config, source);
    let settings = config.block_settings(&super::config_hint(loaded))?;

    let repository = FsVocabularyRepository::new(&config.source.vocabularies);
    let records = repository
        .load_tree(&settings.vocabulary, settings.parent, settings.max_depth)
        .with_context(|| format!("failed to load vocabulary '{}'", settings.vocabulary))?;

    for record in &records {
        println!(
            "{}\t{}\t{}{}",
            record.depth,
            record.tid,
            "  ".repeat(record.depth),
            record.name
        );
    }

    Ok(())
}
