//! Context-aware escaping for rendered list formats

/// Escape text for an HTML text node or double-quoted attribute
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape Markdown link text
///
/// Only characters that would end or nest the `[...]` label are escaped.
pub fn escape_markdown_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('[', "\\[")
        .replace(']', "\\]")
}

/// Markdown link destination, angle-bracketed when it would otherwise break
pub fn markdown_destination(url: &str) -> String {
    if url.chars().any(|c| c.is_whitespace() || c == '(' || c == ')') {
        format!("<{}>", url.replace('<', "%3C").replace('>', "%3E"))
    } else {
        url.to_string()
    }
}
