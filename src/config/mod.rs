//! Configuration module for taxonomy-links
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TAXONOMY_LINKS_*)
//! 3. Config file (--config, ./taxonomy-links.toml, user config dir)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_overrides, discover, load, load_with_warnings, with_env_overrides, ConfigWarning,
    LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{
    BlockConfig, Config, LinksConfig, OutputConfig, OutputFormat, ParentSetting, SourceConfig,
};
