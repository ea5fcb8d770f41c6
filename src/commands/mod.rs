//! Command handlers for the CLI binary

pub mod records;
pub mod render;
pub mod vocabularies;

use std::path::PathBuf;

use taxonomy_links::config::{Config, LoadedConfig, ParentSetting, PROJECT_CONFIG_FILE};
use taxonomy_links::presentation::cli::SourceArgs;

/// Config with command-line source flags applied on top
pub(crate) fn with_source_args(config: &Config, args: &SourceArgs) -> Config {
    let mut config = config.clone();
    if let Some(dir) = &args.vocabularies {
        config.source.vocabularies = dir.clone();
    }
    if let Some(vocabulary) = &args.vocabulary {
        config.block.vocabulary = Some(vocabulary.clone());
    }
    if let Some(parent) = &args.parent {
        config.block.parent = ParentSetting::Text(parent.clone());
    }
    if args.max_depth.is_some() {
        config.block.max_depth = args.max_depth;
    }
    config
}

/// Config file named in "no vocabulary configured" errors
pub(crate) fn config_hint(loaded: &LoadedConfig) -> PathBuf {
    loaded
        .path
        .clone()
        .unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG_FILE))
}
