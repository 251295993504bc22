//! Markdown-subset to HTML renderer for assistant responses.
//!
//! The text-generation service answers with a small, predictable subset of
//! markdown: `##`/`###` headings, `*`/`-` bullets, `1.` numbered items and
//! `**bold**`/`*italic*` spans. This crate turns that text into HTML for
//! direct injection into a display container.
//!
//! # Architecture
//!
//! Rendering is a two-pass pipeline:
//! - Each source line gets its inline spans substituted and is then
//!   classified into a [`Line`] by [`classify_line`].
//! - A depth-1 container pass groups consecutive list items of the same
//!   orderedness into a single `<ul>` or `<ol>` and joins the remaining
//!   blocks with `<br />`.
//!
//! The renderer is total: every input, including the empty string or an
//! error message, produces balanced output. It does not escape HTML; the
//! caller owns the sanitizing context.
//!
//! # Example
//!
//! ```
//! use weldify_markup::render;
//!
//! let html = render("### Settings\n* **Amperage:** 90-110 A\n* **Polarity:** DCEP");
//! assert!(html.starts_with("<h3"));
//! assert_eq!(html.matches("<ul>").count(), 1);
//! assert!(html.contains("<strong>Amperage:</strong>"));
//! ```

mod html;
mod inline;
mod line;
mod renderer;

pub use html::PROSE_CLASS;
pub use inline::apply_inline;
pub use line::{HeadingLevel, Line, ListKind, classify_line};
pub use renderer::{render, render_fragment, split_lines};
