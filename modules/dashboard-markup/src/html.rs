use crate::block::{Block, Document, HeadingTier};
use crate::inline::Inline;
use crate::markup::Markup;

const PARAGRAPH_OPEN: &str = r#"<p class="mb-3">"#;
const LIST_OPEN: &str = r#"<ul class="list-disc my-3">"#;
const ITEM_OPEN: &str = r#"<li class="ml-5 mb-1">"#;
const EMOJI_OPEN: &str = r#"<span class="text-xl mr-1">"#;

fn heading_tag(tier: HeadingTier) -> (&'static str, &'static str) {
    match tier {
        HeadingTier::Primary => ("h3", "text-xl font-semibold mt-4 mb-2"),
        HeadingTier::Secondary => ("h4", "text-lg font-semibold mt-3 mb-2"),
        HeadingTier::Tertiary => ("h5", "text-base font-semibold mt-2 mb-1"),
    }
}

/// Write a block tree as a flat sequence of block-level elements.
/// Headings sit at the top level next to paragraphs and lists, so the
/// output may open with `<h3>`; text is only ever written inside a `<p>`.
/// A document with no blocks becomes one empty paragraph.
pub fn to_html(doc: &Document) -> Markup {
    let mut out = String::new();

    if doc.blocks.is_empty() {
        out.push_str(PARAGRAPH_OPEN);
        out.push_str("</p>");
        return Markup::from_rendered(out);
    }

    for block in &doc.blocks {
        match block {
            Block::Heading { tier, content } => {
                let (tag, class) = heading_tag(*tier);
                out.push_str(&format!(r#"<{tag} class="{class}">"#));
                write_inlines(&mut out, content);
                out.push_str(&format!("</{tag}>"));
            }
            Block::Paragraph(lines) => {
                out.push_str(PARAGRAPH_OPEN);
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    write_inlines(&mut out, line);
                }
                out.push_str("</p>");
            }
            Block::List(items) => {
                out.push_str(LIST_OPEN);
                for item in items {
                    out.push_str(ITEM_OPEN);
                    write_inlines(&mut out, item);
                    out.push_str("</li>");
                }
                out.push_str("</ul>");
            }
        }
    }

    Markup::from_rendered(out)
}

fn write_inlines(out: &mut String, spans: &[Inline]) {
    for span in spans {
        match span {
            Inline::Text(text) => out.push_str(&html_escape(text)),
            Inline::Strong(children) => {
                out.push_str("<strong>");
                write_inlines(out, children);
                out.push_str("</strong>");
            }
            Inline::Emoji(glyph) => {
                out.push_str(EMOJI_OPEN);
                out.push_str(glyph);
                out.push_str("</span>");
            }
        }
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
