//! Graphviz attributes used by the exporter, with typed payloads.
//!
//! # Examples
//!
//! ```
//! use grl_colouring::dot::attr::{Attr, Style};
//!
//! assert_eq!(Attr::Penwidth(3.0).to_string(), "penwidth=3");
//! assert_eq!(Attr::Label("a \"b\"".into()).to_string(), r#"label="a \"b\"""#);
//! assert_eq!(Attr::Style(Style::Filled).to_string(), "style=filled");
//! ```
//!
//! Reference: <https://graphviz.org/doc/info/attrs.html>

use std::fmt;

/// Node or edge drawing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Filled,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Style::Filled => "filled",
        };
        write!(f, "{}", s)
    }
}

/// A Graphviz attribute.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Attr {
    /// Basic drawing color, as an index into the color scheme
    Color(u32),
    /// Color scheme namespace
    Colorscheme(String),
    /// Color to fill the node background, as an index into the color scheme
    Fillcolor(u32),
    /// Text label attached to objects
    Label(String),
    /// Width of the pen used to draw lines and curves, in points
    Penwidth(f64),
    /// Style information for components of the graph
    Style(Style),
}

impl Attr {
    /// Gets the attribute name as it appears in DOT.
    pub fn name(&self) -> &'static str {
        match self {
            Attr::Color(_) => "color",
            Attr::Colorscheme(_) => "colorscheme",
            Attr::Fillcolor(_) => "fillcolor",
            Attr::Label(_) => "label",
            Attr::Penwidth(_) => "penwidth",
            Attr::Style(_) => "style",
        }
    }

    /// Gets the attribute value as it appears in DOT, quoted where needed.
    pub fn value(&self) -> String {
        match self {
            Attr::Color(v) | Attr::Fillcolor(v) => v.to_string(),
            Attr::Colorscheme(v) => v.clone(),
            Attr::Label(v) => quote(v),
            Attr::Penwidth(v) => v.to_string(),
            Attr::Style(v) => v.to_string(),
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name(), self.value())
    }
}

/// Quotes a string as a DOT double-quoted string.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// True if `s` can appear in DOT unquoted as an identifier or numeral.
pub fn is_plain_id(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        Some(c) if c.is_ascii_digit() => chars.all(|c| c.is_ascii_digit()),
        _ => false,
    }
}

/// Formats an attribute list as `[a=1,b=2]`, or nothing if it is empty.
pub fn format_attr_list(attrs: &[Attr]) -> String {
    if attrs.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = attrs.iter().map(Attr::to_string).collect();
    format!(" [{}]", parts.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Attr::Color(2).to_string(), "color=2");
        assert_eq!(Attr::Colorscheme("set13".into()).to_string(), "colorscheme=set13");
        assert_eq!(Attr::Fillcolor(1).to_string(), "fillcolor=1");
        assert_eq!(Attr::Penwidth(2.5).to_string(), "penwidth=2.5");
        assert_eq!(Attr::Label("7".into()).to_string(), "label=\"7\"");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote(r#"a"b\c"#), r#""a\"b\\c""#);
        assert_eq!(quote("x\ny"), "\"x\\ny\"");
    }

    #[test]
    fn test_is_plain_id() {
        assert!(is_plain_id("G"));
        assert!(is_plain_id("_g1"));
        assert!(is_plain_id("12"));
        assert!(!is_plain_id("1a"));
        assert!(!is_plain_id("my graph"));
        assert!(!is_plain_id(""));
    }

    #[test]
    fn test_format_attr_list() {
        assert_eq!(format_attr_list(&[]), "");
        assert_eq!(
            format_attr_list(&[Attr::Penwidth(3.0), Attr::Style(Style::Filled)]),
            " [penwidth=3,style=filled]"
        );
    }
}
