//! Output Rendering
//!
//! Turns an [`IndentedLinks`] result into text, Markdown, HTML or JSON.
//! Empty results render as the empty string in every format except JSON,
//! which always emits the envelope.

use std::fmt::Write as _;

use crate::application::IndentedLinks;
use crate::config::OutputFormat;
use crate::domain::entities::{ItemList, ListNode};
use crate::error::LinksResult;

use super::escaping::{escape_html, escape_markdown_label, markdown_destination};

/// Indentation unit for nested lines
const INDENT: &str = "  ";

/// Trait for rendering nested link lists
pub trait ItemListRenderer {
    fn render(&self, links: &IndentedLinks) -> LinksResult<String>;
}

/// Indented bullet list for terminals
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Whether to use unicode bullets
    pub unicode: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { unicode: true }
    }
}

impl ItemListRenderer for TextRenderer {
    fn render(&self, links: &IndentedLinks) -> LinksResult<String> {
        let bullet = if self.unicode { "•" } else { "-" };
        let mut out = String::new();
        for (depth, item) in links.items.preorder() {
            let _ = writeln!(
                out,
                "{}{} {} ({})",
                INDENT.repeat(depth),
                bullet,
                item.title,
                item.url
            );
        }
        Ok(out)
    }
}

/// Nested Markdown list
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl ItemListRenderer for MarkdownRenderer {
    fn render(&self, links: &IndentedLinks) -> LinksResult<String> {
        let mut out = String::new();
        for (depth, item) in links.items.preorder() {
            let _ = writeln!(
                out,
                "{}- [{}]({})",
                INDENT.repeat(depth),
                escape_markdown_label(&item.title),
                markdown_destination(&item.url)
            );
        }
        Ok(out)
    }
}

/// Nested `<ul>` markup
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    fn write_list(out: &mut String, list: &ItemList, level: usize) {
        let pad = INDENT.repeat(level * 2);
        let _ = writeln!(out, "{}<ul>", pad);
        for node in list {
            let item = node.item();
            let link = format!(
                "<a href=\"{}\">{}</a>",
                escape_html(&item.url),
                escape_html(&item.title)
            );
            match node {
                ListNode::Leaf(_) => {
                    let _ = writeln!(out, "{}{}<li>{}</li>", pad, INDENT, link);
                }
                ListNode::Group { sublist, .. } => {
                    let _ = writeln!(out, "{}{}<li>{}", pad, INDENT, link);
                    Self::write_list(out, sublist, level + 1);
                    let _ = writeln!(out, "{}{}</li>", pad, INDENT);
                }
            }
        }
        let _ = writeln!(out, "{}</ul>", pad);
    }
}

impl ItemListRenderer for HtmlRenderer {
    fn render(&self, links: &IndentedLinks) -> LinksResult<String> {
        let mut out = String::new();
        if !links.is_empty() {
            Self::write_list(&mut out, &links.items, 0);
        }
        Ok(out)
    }
}

/// JSON renderer for scripting
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ItemListRenderer for JsonRenderer {
    fn render(&self, links: &IndentedLinks) -> LinksResult<String> {
        let mut json = serde_json::to_string_pretty(links)?;
        json.push('\n');
        Ok(json)
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, unicode: bool) -> Box<dyn ItemListRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { unicode }),
        OutputFormat::Markdown => Box::new(MarkdownRenderer),
        OutputFormat::Html => Box::new(HtmlRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
