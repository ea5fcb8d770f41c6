//! LinkItemBuilder port - turns a term into a renderable link

use crate::domain::entities::{LinkItem, TermRecord};

/// Builds the display item for one term record
///
/// The flattener treats the returned item as opaque and only nests it.
pub trait LinkItemBuilder: Send + Sync {
    fn build_item(&self, term: &TermRecord) -> LinkItem;
}

impl<T: LinkItemBuilder + ?Sized> LinkItemBuilder for &T {
    fn build_item(&self, term: &TermRecord) -> LinkItem {
        (**self).build_item(term)
    }
}
