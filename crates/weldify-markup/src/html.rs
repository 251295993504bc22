//! HTML emission for classified lines.
//!
//! Class names follow the display screens' utility-class styling so the
//! rendered fragments blend with the surrounding page.

use std::fmt::Write;

use crate::line::{HeadingLevel, Line, ListKind};

/// Class list of the container `div` wrapping a rendered fragment.
pub const PROSE_CLASS: &str = "prose prose-sm prose-invert max-w-none break-words";

const H2_CLASS: &str = "text-2xl font-semibold mt-6 mb-3 text-orange-500";
const H3_CLASS: &str = "text-xl font-semibold mt-4 mb-2 text-orange-400";
const UNORDERED_ITEM_CLASS: &str = "ml-4 list-disc";
const ORDERED_ITEM_CLASS: &str = "ml-4 list-decimal";

/// Line break inserted between block-level pieces.
pub(crate) const LINE_BREAK: &str = "<br />";

/// Write the HTML for a single classified line.
///
/// Plain text is written verbatim.
pub(crate) fn write_line(line: &Line<'_>, out: &mut String) {
    match *line {
        Line::Heading { level, text } => {
            let (tag, class) = match level {
                HeadingLevel::H2 => ("h2", H2_CLASS),
                HeadingLevel::H3 => ("h3", H3_CLASS),
            };
            let _ = write!(out, r#"<{tag} class="{class}">{text}</{tag}>"#);
        }
        Line::ListItem { kind, text } => {
            let class = match kind {
                ListKind::Ordered => ORDERED_ITEM_CLASS,
                ListKind::Unordered => UNORDERED_ITEM_CLASS,
            };
            let _ = write!(out, r#"<li class="{class}">{text}</li>"#);
        }
        Line::Text(text) => out.push_str(text),
    }
}

/// Write an opening container tag.
pub(crate) fn open_list(kind: ListKind, out: &mut String) {
    let _ = write!(out, "<{}>", kind.tag());
}

/// Write a closing container tag.
pub(crate) fn close_list(kind: ListKind, out: &mut String) {
    let _ = write!(out, "</{}>", kind.tag());
}
