//! Nested link list - the output of tree flattening
//!
//! An [`ItemList`] is an ordered sequence of slots. Each slot is either a
//! plain link ([`ListNode::Leaf`]) or a link that owns a sublist
//! ([`ListNode::Group`]). The parent's display fields and its children are
//! stored separately, so a sublist never carries its parent's title or url.

use serde::Serialize;

/// Kind tag of a renderable item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Link,
}

/// A renderable link built from one term record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkItem {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub title: String,
    pub url: String,
}

impl LinkItem {
    pub fn link(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: ItemKind::Link,
            title: title.into(),
            url: url.into(),
        }
    }
}

/// One slot of a nested list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ListNode {
    Leaf(LinkItem),
    Group {
        #[serde(flatten)]
        item: LinkItem,
        sublist: ItemList,
    },
}

impl ListNode {
    /// The slot's own display item
    pub fn item(&self) -> &LinkItem {
        match self {
            ListNode::Leaf(item) => item,
            ListNode::Group { item, .. } => item,
        }
    }

    /// Children of a group, `None` for a leaf
    pub fn sublist(&self) -> Option<&ItemList> {
        match self {
            ListNode::Leaf(_) => None,
            ListNode::Group { sublist, .. } => Some(sublist),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, ListNode::Group { .. })
    }
}

/// Ordered sequence of list slots
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ItemList {
    nodes: Vec<ListNode>,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[ListNode] {
        &self.nodes
    }

    pub fn get(&self, index: usize) -> Option<&ListNode> {
        self.nodes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ListNode> {
        self.nodes.iter()
    }

    pub fn into_nodes(self) -> Vec<ListNode> {
        self.nodes
    }

    /// Total number of items at every level
    pub fn item_count(&self) -> usize {
        self.preorder().count()
    }

    /// Depth of the deepest item (1 for a flat list, 0 when empty)
    pub fn max_depth(&self) -> usize {
        self.preorder().map(|(depth, _)| depth + 1).max().unwrap_or(0)
    }

    /// Walk every item top-to-bottom, yielding `(depth, item)`
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            stack: vec![(0, self.nodes.iter())],
        }
    }
}

impl From<Vec<ListNode>> for ItemList {
    fn from(nodes: Vec<ListNode>) -> Self {
        Self { nodes }
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a ListNode;
    type IntoIter = std::slice::Iter<'a, ListNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Pre-order iterator over a nested list
pub struct Preorder<'a> {
    stack: Vec<(usize, std::slice::Iter<'a, ListNode>)>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (usize, &'a LinkItem);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (depth, iter) = self.stack.last_mut()?;
            let depth = *depth;
            match iter.next() {
                Some(node) => {
                    if let Some(sublist) = node.sublist() {
                        self.stack.push((depth + 1, sublist.nodes.iter()));
                    }
                    return Some((depth, node.item()));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
