//! Block settings - the two values a site builder enters for the links block
//!
//! - `vocabulary`: machine name of the vocabulary to list
//! - `parent`: optional term that serves as the top of the tree
//!
//! The parent arrives as free text and is coerced to an integer the way a
//! form `intval` does, so `"12abc"` is term 12 and `"abc"` means no parent.
//! Any other value, negative or out of range included, is kept as an id;
//! when no term has it the tree is simply empty.

use super::term_id::{InvalidVocabularyId, TermId, VocabularyId};

/// Explicit parameters for one indented-links build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSettings {
    pub vocabulary: VocabularyId,
    pub parent: Option<TermId>,
    /// Only include terms shallower than this (relative to the tree root)
    pub max_depth: Option<usize>,
}

impl BlockSettings {
    pub fn new(vocabulary: VocabularyId) -> Self {
        Self {
            vocabulary,
            parent: None,
            max_depth: None,
        }
    }

    /// Build settings from raw form values
    pub fn from_form(vocabulary: &str, parent: &str) -> Result<Self, InvalidVocabularyId> {
        Ok(Self {
            vocabulary: VocabularyId::new(vocabulary)?,
            parent: coerce_term_id(parent),
            max_depth: None,
        })
    }

    pub fn with_parent(mut self, parent: Option<TermId>) -> Self {
        self.parent = parent;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Coerce free text to an optional term id
///
/// Leading whitespace is skipped, an optional sign and the leading run of
/// digits are read, everything after is ignored. Unparsable text counts as
/// zero and out-of-range values saturate at the `i64` bounds. Only zero
/// means "no parent".
pub fn coerce_term_id(raw: &str) -> Option<TermId> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .try_fold(0i64, |acc, b| {
            let digit = i64::from(b - b'0');
            let next = acc.checked_mul(10).and_then(|v| {
                if negative {
                    v.checked_sub(digit)
                } else {
                    v.checked_add(digit)
                }
            });
            next.ok_or(if negative { i64::MIN } else { i64::MAX })
        })
        .unwrap_or_else(|saturated| saturated);

    (value != 0).then_some(TermId::new(value))
}
