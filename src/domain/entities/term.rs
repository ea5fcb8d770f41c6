//! Term record - one row of a flattened taxonomy tree query

use serde::Serialize;

use crate::domain::value_objects::TermId;

/// A term as returned by a tree query
///
/// Records arrive in pre-order depth-first order; `depth` is the distance
/// from the query root (0 for the top level of the result).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermRecord {
    pub tid: TermId,
    pub name: String,
    pub depth: usize,
}

impl TermRecord {
    pub fn new(tid: impl Into<TermId>, name: impl Into<String>, depth: usize) -> Self {
        Self {
            tid: tid.into(),
            name: name.into(),
            depth,
        }
    }
}
