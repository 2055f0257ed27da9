//! Report content rendering.
//!
//! Report sections arrive as semi-structured text: `#` headings, `**bold**`
//! spans, `- ` list items, blank-line paragraph breaks and a handful of
//! emoji that should render larger than the surrounding text. The renderer
//! parses that text into a [`Document`] block tree and then writes HTML from
//! the tree, so list runs are always wrapped in exactly one `<ul>` and no
//! block ever nests inside another.
//!
//! Render raw payload text exactly once. [`Markup`] is deliberately not a
//! `&str` so rendered output is not fed back in by accident.

pub mod block;
pub mod html;
pub mod inline;
pub mod markup;
pub mod panels;

pub use block::{parse, Block, Document, HeadingTier};
pub use html::{html_escape, to_html};
pub use inline::{parse_inline, Inline, RECOGNIZED_EMOJI};
pub use markup::Markup;

/// Parse and render one report section's raw `content`.
pub fn render_content(raw: &str) -> Markup {
    to_html(&parse(raw))
}
