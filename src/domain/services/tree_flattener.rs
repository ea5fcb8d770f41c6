//! Tree flattener
//!
//! Converts a pre-order, depth-tagged term sequence into a nested link list
//! in one forward pass. No intermediate tree of term nodes is built: the only
//! extra state is a stack with one frame per open nesting level.
//!
//! - Descending one level: the previous item becomes the parent of a new
//!   open level.
//! - Ascending: one open level is closed per level of decrease; the closed
//!   level's parent and slots become a [`ListNode::Group`] placed back where
//!   the parent stood.
//! - Same depth: the item goes into the next slot of the current level.
//!
//! Levels still open when the input ends are closed innermost first.

use thiserror::Error;

use crate::domain::entities::{ItemList, LinkItem, ListNode, TermRecord};
use crate::domain::ports::LinkItemBuilder;
use crate::domain::value_objects::TermId;

/// Result type for flattening
pub type FlattenResult<T> = Result<T, FlattenError>;

/// Depth sequences the flattener cannot nest
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlattenError {
    /// A record sits above the base depth of the query
    #[error("term {tid} has depth {depth}, which is above the base depth {base_depth}")]
    DepthAboveBase {
        tid: TermId,
        depth: usize,
        base_depth: usize,
    },

    /// The first record does not start at the base depth
    #[error("term {tid} starts the list at relative depth {depth}; expected 0")]
    UnanchoredStart { tid: TermId, depth: usize },

    /// A record is more than one level deeper than its predecessor
    #[error("term {tid} jumps from depth {from} to {to}; children may only be one level deeper")]
    DepthJump { tid: TermId, from: usize, to: usize },
}

/// One open nesting level below the top
#[derive(Debug)]
struct OpenLevel {
    parent: LinkItem,
    slots: Vec<ListNode>,
}

/// Single-pass flattened-tree to nested-list converter
pub struct TreeFlattener<B: LinkItemBuilder> {
    builder: B,
}

impl<B: LinkItemBuilder> TreeFlattener<B> {
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    /// Flatten records whose depths are relative to `base_depth`
    pub fn flatten(&self, records: &[TermRecord], base_depth: usize) -> FlattenResult<ItemList> {
        let mut top: Vec<ListNode> = Vec::new();
        let mut open: Vec<OpenLevel> = Vec::new();
        // Previous record's item, held back until we know whether it has children.
        // Invariant: open.len() equals its depth.
        let mut pending: Option<(usize, LinkItem)> = None;

        for record in records {
            let depth = record
                .depth
                .checked_sub(base_depth)
                .ok_or(FlattenError::DepthAboveBase {
                    tid: record.tid,
                    depth: record.depth,
                    base_depth,
                })?;

            match pending.take() {
                None if depth != 0 => {
                    return Err(FlattenError::UnanchoredStart {
                        tid: record.tid,
                        depth,
                    });
                }
                None => {}
                Some((prev, parent)) if depth == prev + 1 => {
                    log::trace!("open level {} under '{}'", depth, parent.title);
                    open.push(OpenLevel {
                        parent,
                        slots: Vec::new(),
                    });
                }
                Some((prev, _)) if depth > prev => {
                    return Err(FlattenError::DepthJump {
                        tid: record.tid,
                        from: prev,
                        to: depth,
                    });
                }
                Some((prev, last)) => {
                    current_slots(&mut top, &mut open).push(ListNode::Leaf(last));
                    for _ in depth..prev {
                        close_level(&mut top, &mut open);
                    }
                }
            }

            pending = Some((depth, self.builder.build_item(record)));
        }

        if let Some((_, last)) = pending {
            current_slots(&mut top, &mut open).push(ListNode::Leaf(last));
        }
        while !open.is_empty() {
            close_level(&mut top, &mut open);
        }

        log::debug!(
            "flattened {} records into {} top-level slots",
            records.len(),
            top.len()
        );
        Ok(ItemList::from(top))
    }

    /// Flatten using the first record's depth as the base depth
    pub fn flatten_relative(&self, records: &[TermRecord]) -> FlattenResult<ItemList> {
        let base_depth = records.first().map(|r| r.depth).unwrap_or(0);
        self.flatten(records, base_depth)
    }
}

/// Convenience wrapper around [`TreeFlattener::flatten`]
pub fn flatten<B: LinkItemBuilder>(
    records: &[TermRecord],
    base_depth: usize,
    builder: B,
) -> FlattenResult<ItemList> {
    TreeFlattener::new(builder).flatten(records, base_depth)
}

fn current_slots<'a>(top: &'a mut Vec<ListNode>, open: &'a mut [OpenLevel]) -> &'a mut Vec<ListNode> {
    match open.last_mut() {
        Some(level) => &mut level.slots,
        None => top,
    }
}

/// Close the innermost open level, wrapping it into a group in its parent level
fn close_level(top: &mut Vec<ListNode>, open: &mut Vec<OpenLevel>) {
    let Some(level) = open.pop() else {
        return;
    };
    log::trace!(
        "close level under '{}' with {} slots",
        level.parent.title,
        level.slots.len()
    );
    let group = ListNode::Group {
        item: level.parent,
        sublist: ItemList::from(level.slots),
    };
    current_slots(top, open).push(group);
}
