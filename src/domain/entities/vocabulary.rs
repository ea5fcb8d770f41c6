//! Vocabulary - a named set of terms with a parent hierarchy
//!
//! `load_tree` answers the "all descendants of X" query that feeds the
//! flattener. It walks the hierarchy depth-first and tags every term with its
//! distance from the query root.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{TermId, VocabularyId};

use super::term::TermRecord;

/// A term as stored in a vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyTerm {
    pub tid: TermId,
    pub name: String,
    /// Parent terms; empty (or `0`) places the term at the top level
    #[serde(default, alias = "parent", deserialize_with = "one_or_many")]
    pub parents: Vec<TermId>,
    #[serde(default)]
    pub weight: i32,
}

impl VocabularyTerm {
    pub fn new(tid: i64, name: impl Into<String>) -> Self {
        Self {
            tid: TermId::new(tid),
            name: name.into(),
            parents: Vec::new(),
            weight: 0,
        }
    }

    pub fn with_parent(mut self, parent: i64) -> Self {
        self.parents.push(TermId::new(parent));
        self
    }

    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    /// Parents with the `0` root marker folded away
    fn effective_parents(&self) -> Vec<TermId> {
        let parents: Vec<TermId> = self
            .parents
            .iter()
            .copied()
            .filter(|p| !p.is_root())
            .collect();
        if parents.is_empty() {
            vec![TermId::new(0)]
        } else {
            parents
        }
    }
}

/// Accepts both `parent = 3` and `parents = [3, 4]`
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<TermId>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(TermId),
        Many(Vec<TermId>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(id) => vec![id],
        OneOrMany::Many(ids) => ids,
    })
}

/// A vocabulary and all of its terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub vid: VocabularyId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub terms: Vec<VocabularyTerm>,
}

impl Vocabulary {
    pub fn new(vid: VocabularyId, name: impl Into<String>) -> Self {
        Self {
            vid,
            name: name.into(),
            description: None,
            terms: Vec::new(),
        }
    }

    pub fn with_term(mut self, term: VocabularyTerm) -> Self {
        self.terms.push(term);
        self
    }

    pub fn get(&self, tid: TermId) -> Option<&VocabularyTerm> {
        self.terms.iter().find(|t| t.tid == tid)
    }

    /// Pre-order walk of the hierarchy below `parent`
    ///
    /// Direct children of `parent` (or the top-level terms when `parent` is
    /// `None`) get depth 0. Siblings are ordered by weight, then name, then
    /// id. With `max_depth = Some(n)` only depths `< n` are returned. A term
    /// with several parents is listed under each of them.
    pub fn load_tree(&self, parent: Option<TermId>, max_depth: Option<usize>) -> Vec<TermRecord> {
        let mut children: HashMap<TermId, Vec<&VocabularyTerm>> = HashMap::new();
        for term in &self.terms {
            for p in term.effective_parents() {
                children.entry(p).or_default().push(term);
            }
        }
        for siblings in children.values_mut() {
            siblings.sort_by(|a, b| sibling_order(a, b));
        }

        let root = parent.unwrap_or(TermId::new(0));
        let mut records = Vec::new();
        if max_depth == Some(0) {
            return records;
        }

        // (term, depth); reversed pushes keep sibling order on pop
        let mut stack: Vec<(&VocabularyTerm, usize)> = Vec::new();
        let mut path: Vec<TermId> = vec![root];
        if let Some(top) = children.get(&root) {
            stack.extend(top.iter().rev().map(|t| (*t, 0)));
        }

        while let Some((term, depth)) = stack.pop() {
            path.truncate(depth + 1);
            if path.contains(&term.tid) {
                log::warn!(
                    "vocabulary '{}': term {} is its own ancestor, skipping",
                    self.vid,
                    term.tid
                );
                continue;
            }

            records.push(TermRecord::new(term.tid, term.name.clone(), depth));
            path.push(term.tid);

            let next_depth = depth + 1;
            if max_depth.is_some_and(|max| next_depth >= max) {
                continue;
            }
            if let Some(kids) = children.get(&term.tid) {
                stack.extend(kids.iter().rev().map(|t| (*t, next_depth)));
            }
        }

        log::debug!(
            "vocabulary '{}': loaded {} records below {}",
            self.vid,
            records.len(),
            root
        );
        records
    }
}

fn sibling_order(a: &VocabularyTerm, b: &VocabularyTerm) -> Ordering {
    a.weight
        .cmp(&b.weight)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.tid.cmp(&b.tid))
}
