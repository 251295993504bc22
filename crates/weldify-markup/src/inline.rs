//! Inline span substitution (`**bold**` and `*italic*`).

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `***X***`, emitted as bold wrapping italic.
static BOLD_ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*([^*]+?)\*\*\*").unwrap());

/// Shortest `**X**` span with non-empty content.
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// Shortest `*X*` span whose content neither starts with whitespace nor
/// contains an asterisk. A leading `* ` bullet marker therefore never opens
/// an italic span, and a dangling `**` never matches as an empty one.
/// Matches whose delimiters touch another `*` are rejected in
/// [`replace_italic`].
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*\s][^*]*?)\*").unwrap());

/// Substitute emphasis spans in a single line.
///
/// `***X***` runs first, then bold, so that `**bold**` is never
/// half-consumed by the italic rule. Unterminated markers are left
/// untouched and tags always nest. Returns the input
/// unchanged (borrowed) when the line has no asterisks.
///
/// # Examples
///
/// ```
/// use weldify_markup::apply_inline;
///
/// assert_eq!(
///     apply_inline("**bold** and *italic*"),
///     "<strong>bold</strong> and <em>italic</em>"
/// );
/// assert_eq!(apply_inline("**unterminated"), "**unterminated");
/// ```
pub fn apply_inline(line: &str) -> Cow<'_, str> {
    if !line.contains('*') {
        return Cow::Borrowed(line);
    }

    let bold_italic = BOLD_ITALIC_RE.replace_all(line, "<strong><em>$1</em></strong>");
    let bold = BOLD_RE
        .replace_all(&bold_italic, "<strong>$1</strong>")
        .into_owned();
    Cow::Owned(replace_italic(&bold).into_owned())
}

/// Italic pass. A span whose opening or closing `*` is adjacent to another
/// `*` is a leftover of an unterminated bold marker and stays as is.
fn replace_italic(text: &str) -> Cow<'_, str> {
    ITALIC_RE.replace_all(text, |caps: &Captures<'_>| {
        let span = &caps[0];
        let (start, end) = caps
            .get(0)
            .map_or((0, text.len()), |whole| (whole.start(), whole.end()));
        if text[..start].ends_with('*') || text[end..].starts_with('*') {
            span.to_owned()
        } else {
            format!("<em>{}</em>", &caps[1])
        }
    })
}
