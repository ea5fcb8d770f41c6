//! Configuration loading
//!
//! Lookup order (first hit wins):
//! 1. `--config PATH`
//! 2. `./taxonomy-links.toml`
//! 3. `<user config dir>/taxonomy-links/config.toml`
//! 4. Built-in defaults
//!
//! Environment variables (`TAXONOMY_LINKS_*`) are applied on top of whatever
//! was loaded; CLI flags are applied last by the caller.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LinksError, LinksResult};

use super::types::{Config, OutputFormat, ParentSetting};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "taxonomy-links.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LinksResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LinksError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|dotted| {
            let key = dotted.rsplit('.').next().unwrap_or(&dotted).to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find the config file to use, if any
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let project = cwd.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }

    dirs::config_dir()
        .map(|dir| dir.join("taxonomy-links").join("config.toml"))
        .filter(|p| p.is_file())
}

/// Discover, load and apply environment overrides
///
/// An explicit path that cannot be read is an error; a discovered file that
/// fails to parse is an error too, since silently ignoring it would render
/// the wrong vocabulary.
pub fn load(explicit: Option<&Path>, cwd: &Path) -> LinksResult<LoadedConfig> {
    let Some(path) = discover(explicit, cwd) else {
        log::debug!("no config file found, using defaults");
        return Ok(LoadedConfig {
            config: with_env_overrides(Config::default()),
            ..LoadedConfig::default()
        });
    };

    log::debug!("loading config from {}", path.display());
    let (config, warnings) = load_with_warnings(&path)?;
    Ok(LoadedConfig {
        config: with_env_overrides(config),
        path: Some(path),
        warnings,
    })
}

/// Apply environment variable overrides (TAXONOMY_LINKS_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary lookup (the environment in production)
pub fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(vocabulary) = lookup("TAXONOMY_LINKS_VOCABULARY") {
        config.block.vocabulary = Some(vocabulary);
    }

    if let Some(parent) = lookup("TAXONOMY_LINKS_PARENT") {
        config.block.parent = ParentSetting::Text(parent);
    }

    if let Some(max_depth) = lookup("TAXONOMY_LINKS_MAX_DEPTH") {
        match max_depth.trim().parse::<usize>() {
            Ok(n) => config.block.max_depth = Some(n),
            Err(_) => log::warn!("ignoring TAXONOMY_LINKS_MAX_DEPTH='{}'", max_depth),
        }
    }

    if let Some(format) = lookup("TAXONOMY_LINKS_FORMAT") {
        match OutputFormat::parse_lenient(&format) {
            Some(f) => config.output.format = f,
            None => log::warn!("ignoring TAXONOMY_LINKS_FORMAT='{}'", format),
        }
    }

    if let Some(dir) = lookup("TAXONOMY_LINKS_VOCABULARIES") {
        config.source.vocabularies = PathBuf::from(dir);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "block",
        "vocabulary",
        "parent",
        "max_depth",
        "source",
        "vocabularies",
        "links",
        "route",
        "base_url",
        "output",
        "format",
        "unicode",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, edit_distance(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

/// Levenshtein distance over bytes
fn edit_distance(a: &str, b: &str) -> usize {
    let b = b.as_bytes();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, &ac) in a.as_bytes().iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(ac != bc);
            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diagonal = above;
        }
    }

    row[b.len()]
}
