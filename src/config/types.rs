//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{coerce_term_id, BlockSettings, TermId, VocabularyId};
use crate::error::{LinksError, LinksResult};
use crate::infrastructure::links::{RouteLinkBuilder, DEFAULT_TERM_ROUTE};

use super::loader::{self, ConfigWarning};

/// Block configuration: which vocabulary, and which term tops the tree
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BlockConfig {
    #[serde(default)]
    pub vocabulary: Option<String>,

    #[serde(default)]
    pub parent: ParentSetting,

    #[serde(default)]
    pub max_depth: Option<usize>,
}

/// Parent term as entered: a number or free text coerced to one
///
/// ```toml
/// [block]
/// parent = 12
/// # or
/// parent = "12"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum ParentSetting {
    #[default]
    Unset,
    Number(i64),
    Text(String),
}

impl ParentSetting {
    /// Term id after integer coercion; only zero means none
    pub fn term_id(&self) -> Option<TermId> {
        match self {
            ParentSetting::Unset => None,
            ParentSetting::Number(0) => None,
            ParentSetting::Number(n) => Some(TermId::new(*n)),
            ParentSetting::Text(s) => coerce_term_id(s),
        }
    }
}

/// Vocabulary source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Directory holding `<vid>.toml|json|yaml` files
    #[serde(default = "default_vocabularies_dir")]
    pub vocabularies: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            vocabularies: default_vocabularies_dir(),
        }
    }
}

fn default_vocabularies_dir() -> PathBuf {
    PathBuf::from("vocabularies")
}

/// Link construction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfig {
    #[serde(default = "default_route")]
    pub route: String,

    #[serde(default)]
    pub base_url: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            route: default_route(),
            base_url: String::new(),
        }
    }
}

fn default_route() -> String {
    DEFAULT_TERM_ROUTE.to_string()
}

/// Rendered output format
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented bullets for terminals
    #[default]
    Text,
    /// Nested Markdown list
    Markdown,
    /// Nested `<ul>` markup
    Html,
    /// Nested JSON for scripting
    Json,
}

impl OutputFormat {
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "markdown" | "md" => Some(Self::Markdown),
            "html" => Some(Self::Html),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub block: BlockConfig,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub links: LinksConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> LinksResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> LinksResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Block settings for a build
    ///
    /// `config_hint` is only used in the error message when no vocabulary
    /// is configured.
    pub fn block_settings(&self, config_hint: &Path) -> LinksResult<BlockSettings> {
        let vocabulary = self
            .block
            .vocabulary
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| LinksError::MissingVocabulary {
                hint: config_hint.to_path_buf(),
            })?;

        Ok(BlockSettings::new(VocabularyId::new(vocabulary)?)
            .with_parent(self.block.parent.term_id())
            .with_max_depth(self.block.max_depth))
    }

    /// Link builder for the configured route
    pub fn link_builder(&self) -> LinksResult<RouteLinkBuilder> {
        Ok(RouteLinkBuilder::new(self.links.route.clone())?.with_base_url(self.links.base_url.clone()))
    }
}
