use std::sync::LazyLock;

use regex::Regex;

use crate::inline::{parse_inline, Inline};

// 1-3 markers, whitespace, then non-blank text. `####` never matches.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(#{1,3})[ \t]+(\S.*?)\s*$").unwrap());

// `- ` followed by non-blank text; a bare `- ` stays plain text.
static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*- (.*\S)\s*$").unwrap());

/// Heading emphasis, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingTier {
    Primary,
    Secondary,
    Tertiary,
}

impl HeadingTier {
    fn from_markers(count: usize) -> Option<Self> {
        match count {
            1 => Some(HeadingTier::Primary),
            2 => Some(HeadingTier::Secondary),
            3 => Some(HeadingTier::Tertiary),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        tier: HeadingTier,
        content: Vec<Inline>,
    },
    /// Consecutive text lines, in order.
    Paragraph(Vec<Vec<Inline>>),
    /// A maximal run of list items.
    List(Vec<Vec<Inline>>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

enum Line<'a> {
    Blank,
    Heading(HeadingTier, &'a str),
    ListItem(&'a str),
    Text(&'a str),
}

/// Headings are checked before list items, so `# - x` is a heading whose
/// text is `- x`.
fn classify(line: &str) -> Line<'_> {
    if line.trim().is_empty() {
        return Line::Blank;
    }

    if let Some(caps) = HEADING_RE.captures(line) {
        let tier = caps
            .get(1)
            .and_then(|m| HeadingTier::from_markers(m.as_str().len()));
        if let (Some(tier), Some(text)) = (tier, caps.get(2)) {
            return Line::Heading(tier, text.as_str());
        }
    }

    if let Some(text) = LIST_ITEM_RE.captures(line).and_then(|caps| caps.get(1)) {
        return Line::ListItem(text.as_str());
    }

    Line::Text(line.trim())
}

/// The block currently being filled.
enum Open {
    Paragraph(Vec<Vec<Inline>>),
    List(Vec<Vec<Inline>>),
}

#[derive(Default)]
struct Builder {
    blocks: Vec<Block>,
    open: Option<Open>,
}

impl Builder {
    fn close(&mut self) {
        match self.open.take() {
            Some(Open::Paragraph(lines)) => self.blocks.push(Block::Paragraph(lines)),
            Some(Open::List(items)) => self.blocks.push(Block::List(items)),
            None => {}
        }
    }

    fn heading(&mut self, tier: HeadingTier, text: &str) {
        self.close();
        self.blocks.push(Block::Heading {
            tier,
            content: parse_inline(text),
        });
    }

    fn list_item(&mut self, text: &str) {
        let item = parse_inline(text);
        if let Some(Open::List(items)) = &mut self.open {
            items.push(item);
            return;
        }
        self.close();
        self.open = Some(Open::List(vec![item]));
    }

    fn text(&mut self, text: &str) {
        let line = parse_inline(text);
        if let Some(Open::Paragraph(lines)) = &mut self.open {
            lines.push(line);
            return;
        }
        self.close();
        self.open = Some(Open::Paragraph(vec![line]));
    }

    fn finish(mut self) -> Document {
        self.close();
        Document {
            blocks: self.blocks,
        }
    }
}

/// Parse raw section content into a block tree.
pub fn parse(raw: &str) -> Document {
    let normalized = raw.replace("\r\n", "\n");
    let mut builder = Builder::default();

    for line in normalized.split('\n') {
        match classify(line) {
            Line::Blank => builder.close(),
            Line::Heading(tier, text) => builder.heading(tier, text),
            Line::ListItem(text) => builder.list_item(text),
            Line::Text(text) => builder.text(text),
        }
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Vec<Inline> {
        vec![Inline::Text(s.to_string())]
    }

    fn heading(tier: HeadingTier, s: &str) -> Block {
        Block::Heading {
            tier,
            content: text(s),
        }
    }

    #[test]
    fn heading_list_paragraph() {
        let doc = parse("# Title\n\n- item1\n- item2\n\nMore text");
        assert_eq!(
            doc.blocks,
            vec![
                heading(HeadingTier::Primary, "Title"),
                Block::List(vec![text("item1"), text("item2")]),
                Block::Paragraph(vec![text("More text")]),
            ]
        );
    }

    #[test]
    fn three_heading_tiers() {
        let doc = parse("# One\n## Two\n### Three");
        assert_eq!(
            doc.blocks,
            vec![
                heading(HeadingTier::Primary, "One"),
                heading(HeadingTier::Secondary, "Two"),
                heading(HeadingTier::Tertiary, "Three"),
            ]
        );
    }

    #[test]
    fn four_markers_is_text() {
        let doc = parse("#### Deep");
        assert_eq!(doc.blocks, vec![Block::Paragraph(vec![text("#### Deep")])]);
    }

    #[test]
    fn marker_needs_space_and_text() {
        let doc = parse("#hashtag\n# ");
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph(vec![text("#hashtag"), text("#")])]
        );
    }

    #[test]
    fn heading_wins_over_list_item() {
        let doc = parse("# - not a list");
        assert_eq!(doc.blocks, vec![heading(HeadingTier::Primary, "- not a list")]);
    }

    #[test]
    fn list_item_text_keeps_literal_hash() {
        let doc = parse("- # tagged");
        assert_eq!(doc.blocks, vec![Block::List(vec![text("# tagged")])]);
    }

    #[test]
    fn bare_dash_is_not_an_empty_item() {
        let doc = parse("- \n- a");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Paragraph(vec![text("-")]),
                Block::List(vec![text("a")]),
            ]
        );
    }

    #[test]
    fn indented_items_and_crlf() {
        let doc = parse("  - a\r\n  - b\r\n");
        assert_eq!(doc.blocks, vec![Block::List(vec![text("a"), text("b")])]);
    }

    #[test]
    fn text_line_breaks_a_list_run() {
        let doc = parse("- a\nnote\n- b");
        assert_eq!(
            doc.blocks,
            vec![
                Block::List(vec![text("a")]),
                Block::Paragraph(vec![text("note")]),
                Block::List(vec![text("b")]),
            ]
        );
    }

    #[test]
    fn blank_line_splits_lists() {
        let doc = parse("- a\n\n- b");
        assert_eq!(
            doc.blocks,
            vec![Block::List(vec![text("a")]), Block::List(vec![text("b")])]
        );
    }

    #[test]
    fn consecutive_text_lines_share_a_paragraph() {
        let doc = parse("line one\nline two\n\n\n\nline three");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Paragraph(vec![text("line one"), text("line two")]),
                Block::Paragraph(vec![text("line three")]),
            ]
        );
    }

    #[test]
    fn dash_without_space_is_text() {
        let doc = parse("-5 degrees\nwell- known");
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph(vec![text("-5 degrees"), text("well- known")])]
        );
    }

    #[test]
    fn empty_and_blank_input_have_no_blocks() {
        assert!(parse("").blocks.is_empty());
        assert!(parse("\n  \n\t\n").blocks.is_empty());
    }
}
