//! Line-oriented renderer with depth-1 list grouping.

use crate::html::{LINE_BREAK, PROSE_CLASS, close_list, open_list, write_line};
use crate::inline::apply_inline;
use crate::line::{ListKind, classify_line};

/// Split source text into lines.
///
/// Both a real newline and the two-character escape `\n` separate lines,
/// since the upstream service encodes breaks either way. A trailing `\r` is
/// dropped from each line.
///
/// # Examples
///
/// ```
/// use weldify_markup::split_lines;
///
/// let lines: Vec<&str> = split_lines("a\\nb\nc").collect();
/// assert_eq!(lines, ["a", "b", "c"]);
/// ```
pub fn split_lines(source: &str) -> impl Iterator<Item = &str> {
    source
        .split("\\n")
        .flat_map(|chunk| chunk.split('\n'))
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Render markup text to HTML.
///
/// Consecutive list items of the same kind share one container; a change of
/// kind or a non-list line closes it, and a container still open at the end
/// of input is closed before returning. Block lines are joined with
/// `<br />`, but no break is ever placed next to a container tag or between
/// list items.
///
/// # Examples
///
/// ```
/// use weldify_markup::render;
///
/// assert_eq!(render(""), "");
/// assert_eq!(
///     render("1. a\n2. b"),
///     r#"<ol><li class="ml-4 list-decimal">a</li><li class="ml-4 list-decimal">b</li></ol>"#
/// );
/// ```
pub fn render(source: &str) -> String {
    let mut out = String::with_capacity(source.len() + source.len() / 2);
    let mut open: Option<ListKind> = None;
    let mut after_block = false;

    for raw in split_lines(source) {
        let substituted = apply_inline(raw);
        let line = classify_line(&substituted);
        let kind = line.list_kind();

        if let Some(current) = open
            && kind != Some(current)
        {
            close_list(current, &mut out);
            open = None;
        }

        match kind {
            Some(kind) => {
                if open.is_none() {
                    open_list(kind, &mut out);
                    open = Some(kind);
                }
                after_block = false;
            }
            None => {
                if after_block {
                    out.push_str(LINE_BREAK);
                }
                after_block = true;
            }
        }

        write_line(&line, &mut out);
    }

    if let Some(current) = open {
        close_list(current, &mut out);
    }

    out
}

/// Render markup text wrapped in the display container `div`.
pub fn render_fragment(source: &str) -> String {
    format!(r#"<div class="{PROSE_CLASS}">{}</div>"#, render(source))
}
