//! Route link builder
//!
//! Implements the LinkItemBuilder port by filling a route pattern with the
//! term id, e.g. `/taxonomy/term/{tid}` → `/taxonomy/term/12`.

use crate::domain::entities::{LinkItem, TermRecord};
use crate::domain::ports::LinkItemBuilder;
use crate::error::{LinksError, LinksResult};

/// Canonical term route
pub const DEFAULT_TERM_ROUTE: &str = "/taxonomy/term/{tid}";

const TID_PLACEHOLDER: &str = "{tid}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLinkBuilder {
    pattern: String,
    base_url: String,
}

impl RouteLinkBuilder {
    /// Builder for `pattern`, which must contain `{tid}`
    pub fn new(pattern: impl Into<String>) -> LinksResult<Self> {
        let pattern = pattern.into();
        if !pattern.contains(TID_PLACEHOLDER) {
            return Err(LinksError::InvalidLinkPattern { pattern });
        }
        Ok(Self {
            pattern,
            base_url: String::new(),
        })
    }

    /// Prefix every url with `base_url` (trailing slash trimmed)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn url_for(&self, term: &TermRecord) -> String {
        let path = self.pattern.replace(TID_PLACEHOLDER, &term.tid.to_string());
        format!("{}{}", self.base_url, path)
    }
}

impl Default for RouteLinkBuilder {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TERM_ROUTE.to_string(),
            base_url: String::new(),
        }
    }
}

impl LinkItemBuilder for RouteLinkBuilder {
    fn build_item(&self, term: &TermRecord) -> LinkItem {
        LinkItem::link(term.name.clone(), self.url_for(term))
    }
}
