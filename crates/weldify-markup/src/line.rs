//! Line classification.

use std::sync::LazyLock;

use regex::Regex;

/// Numbered list marker: ASCII digits, a dot and a space.
static ORDERED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+\. ").unwrap());

/// Heading level supported by the markup subset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingLevel {
    /// `## ` prefix.
    H2,
    /// `### ` prefix.
    H3,
}

/// List container kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    /// Numbered items, rendered inside `<ol>`.
    Ordered,
    /// Bullet items, rendered inside `<ul>`.
    Unordered,
}

impl ListKind {
    /// Container tag name.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Ordered => "ol",
            Self::Unordered => "ul",
        }
    }
}

/// A classified source line with its marker stripped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line<'a> {
    /// Heading line.
    Heading {
        /// Heading level.
        level: HeadingLevel,
        /// Heading content without the `#` prefix.
        text: &'a str,
    },
    /// List item line.
    ListItem {
        /// Ordered or unordered.
        kind: ListKind,
        /// Item content without the marker.
        text: &'a str,
    },
    /// Anything else, passed through unchanged.
    Text(&'a str),
}

impl Line<'_> {
    /// List kind if this line is a list item.
    #[must_use]
    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            Self::ListItem { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Classify a line, testing prefixes in priority order.
///
/// Headings win over list markers, and the numbered pattern is tested before
/// bullets. Inline substitution is expected to have run already.
///
/// # Examples
///
/// ```
/// use weldify_markup::{HeadingLevel, Line, ListKind, classify_line};
///
/// assert_eq!(
///     classify_line("### Title"),
///     Line::Heading { level: HeadingLevel::H3, text: "Title" }
/// );
/// assert_eq!(
///     classify_line("12. twelfth"),
///     Line::ListItem { kind: ListKind::Ordered, text: "twelfth" }
/// );
/// assert_eq!(classify_line("plain"), Line::Text("plain"));
/// ```
pub fn classify_line(line: &str) -> Line<'_> {
    if let Some(text) = line.strip_prefix("### ") {
        return Line::Heading {
            level: HeadingLevel::H3,
            text,
        };
    }
    if let Some(text) = line.strip_prefix("## ") {
        return Line::Heading {
            level: HeadingLevel::H2,
            text,
        };
    }
    if let Some(marker) = ORDERED_ITEM_RE.find(line) {
        return Line::ListItem {
            kind: ListKind::Ordered,
            text: &line[marker.end()..],
        };
    }
    if let Some(text) = line.strip_prefix("* ").or_else(|| line.strip_prefix("- ")) {
        return Line::ListItem {
            kind: ListKind::Unordered,
            text,
        };
    }
    Line::Text(line)
}
