//! File-backed vocabulary repository
//!
//! Implements the TermRecordSource port over a directory of vocabulary files.
//! Vocabulary `tags` lives in `tags.toml`, `tags.json`, `tags.yaml` or
//! `tags.yml`; the first one found wins.
//!
//! ```toml
//! vid = "tags"
//! name = "Tags"
//!
//! [[terms]]
//! tid = 1
//! name = "Fruit"
//!
//! [[terms]]
//! tid = 2
//! name = "Apple"
//! parent = 1
//! ```

use std::path::{Path, PathBuf};

use crate::domain::entities::{TermRecord, Vocabulary};
use crate::domain::ports::{TermRecordSource, TermSourceError, TermSourceResult};
use crate::domain::value_objects::{TermId, VocabularyId};

/// Supported vocabulary file formats, in lookup order
const EXTENSIONS: [&str; 4] = ["toml", "json", "yaml", "yml"];

/// Vocabulary repository reading one file per vocabulary
#[derive(Debug, Clone)]
pub struct FsVocabularyRepository {
    root: PathBuf,
}

impl FsVocabularyRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `vid`, if any
    pub fn locate(&self, vid: &VocabularyId) -> Option<PathBuf> {
        EXTENSIONS
            .iter()
            .map(|ext| self.root.join(format!("{}.{}", vid, ext)))
            .find(|path| path.is_file())
    }

    /// Load and parse one vocabulary
    pub fn load(&self, vid: &VocabularyId) -> TermSourceResult<Vocabulary> {
        let path = self
            .locate(vid)
            .ok_or_else(|| TermSourceError::VocabularyNotFound {
                vid: vid.clone(),
                location: self.root.display().to_string(),
            })?;

        let vocabulary = parse_vocabulary_file(&path)?;
        if &vocabulary.vid != vid {
            return Err(TermSourceError::InvalidVocabulary {
                file: path,
                message: format!("declares vid '{}', expected '{}'", vocabulary.vid, vid),
            });
        }

        log::debug!(
            "loaded vocabulary '{}' ({} terms) from {}",
            vid,
            vocabulary.terms.len(),
            path.display()
        );
        Ok(vocabulary)
    }

    /// All vocabularies in the directory, sorted by vid
    ///
    /// Files that fail to parse are skipped with a warning.
    pub fn list(&self) -> TermSourceResult<Vec<Vocabulary>> {
        let mut vocabularies = Vec::new();

        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            let supported = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| EXTENSIONS.contains(&e));
            if !path.is_file() || !supported {
                continue;
            }

            match parse_vocabulary_file(&path) {
                Ok(vocabulary) => vocabularies.push(vocabulary),
                Err(e) => log::warn!("skipping {}: {}", path.display(), e),
            }
        }

        vocabularies.sort_by(|a, b| a.vid.cmp(&b.vid));
        Ok(vocabularies)
    }
}

impl TermRecordSource for FsVocabularyRepository {
    fn load_tree(
        &self,
        vocabulary: &VocabularyId,
        parent: Option<TermId>,
        max_depth: Option<usize>,
    ) -> TermSourceResult<Vec<TermRecord>> {
        Ok(self.load(vocabulary)?.load_tree(parent, max_depth))
    }
}

/// File body without a `vid` falls back to the file stem
#[derive(serde::Deserialize)]
struct VocabularyFile {
    #[serde(default)]
    vid: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    terms: Vec<crate::domain::entities::VocabularyTerm>,
}

/// Parse a vocabulary file, picking the format from its extension
pub fn parse_vocabulary_file(path: &Path) -> TermSourceResult<Vocabulary> {
    let content = std::fs::read_to_string(path)?;
    let invalid = |message: String| TermSourceError::InvalidVocabulary {
        file: path.to_path_buf(),
        message,
    };

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let file: VocabularyFile = match extension {
        "toml" => toml::from_str(&content).map_err(|e| invalid(e.to_string()))?,
        "json" => serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?,
        "yaml" | "yml" => serde_yaml_ng::from_str(&content).map_err(|e| invalid(e.to_string()))?,
        other => return Err(invalid(format!("unsupported extension '{}'", other))),
    };

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();
    let vid = VocabularyId::new(file.vid.unwrap_or(stem)).map_err(|e| invalid(e.to_string()))?;

    Ok(Vocabulary {
        name: if file.name.is_empty() {
            vid.to_string()
        } else {
            file.name
        },
        vid,
        description: file.description,
        terms: file.terms,
    })
}
