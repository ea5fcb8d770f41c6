//! Reusable test fixtures.

use taxonomy_links::domain::entities::{LinkItem, TermRecord};
use taxonomy_links::domain::ports::LinkItemBuilder;

/// Produce vocabulary:
///
/// ```text
/// Fruit (1)
///   Apple (2)
///     Cox (3)
///   Pear (4)
/// Veg (5)
///   Kale (6)
/// ```
pub const PRODUCE_TOML: &str = r#"
vid = "produce"
name = "Produce"
description = "Things that grow"

[[terms]]
tid = 1
name = "Fruit"

[[terms]]
tid = 2
name = "Apple"
parent = 1

[[terms]]
tid = 3
name = "Cox"
parent = 2

[[terms]]
tid = 4
name = "Pear"
parent = 1

[[terms]]
tid = 5
name = "Veg"
weight = 1

[[terms]]
tid = 6
name = "Kale"
parent = 5
"#;

/// Flat tags vocabulary in JSON
pub const TAGS_JSON: &str = r#"{
  "vid": "tags",
  "name": "Tags",
  "terms": [
    {"tid": 10, "name": "rust"},
    {"tid": 11, "name": "drupal"}
  ]
}"#;

/// Vocabulary without terms
pub const EMPTY_TOML: &str = "vid = \"empty\"\nname = \"Empty\"\n";

/// Build a record; tid doubles as the URL key
pub fn rec(tid: i64, name: &str, depth: usize) -> TermRecord {
    TermRecord::new(tid, name, depth)
}

/// Records from `(name, depth)` pairs, numbered from 1
pub fn records(pairs: &[(&str, usize)]) -> Vec<TermRecord> {
    pairs.iter()
        .enumerate()
        .map(|(i, (name, depth))| rec(i as i64 + 1, name, *depth))
        .collect()
}

/// Links to `/term/{tid}`
pub struct TermPaths;

impl LinkItemBuilder for TermPaths {
    fn build_item(&self, record: &TermRecord) -> LinkItem {
        LinkItem::link(record.name.clone(), format!("/term/{}", record.tid))
    }
}
