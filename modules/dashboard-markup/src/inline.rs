use std::sync::LazyLock;

use regex::Regex;

/// Emoji that are re-wrapped to render larger than the surrounding text.
/// ⚕ ⚠ ℹ are matched with or without the U+FE0F variation selector.
pub const RECOGNIZED_EMOJI: &[&str] = &[
    "\u{2695}\u{FE0F}",
    "\u{1F306}",
    "\u{1F4C9}",
    "\u{1F331}",
    "\u{1F4A7}",
    "\u{1F52C}",
    "\u{1F3ED}",
    "\u{26A0}\u{FE0F}",
    "\u{2705}",
    "\u{274C}",
    "\u{2139}\u{FE0F}",
    "\u{1F30D}",
];

// Non-empty, no `*` inside. Leftmost-first, non-overlapping.
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*[^*]+\*\*").unwrap());

static EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "\u{2695}\u{FE0F}?|\u{1F306}|\u{1F4C9}|\u{1F331}|\u{1F4A7}|\u{1F52C}|\u{1F3ED}\
         |\u{26A0}\u{FE0F}?|\u{2705}|\u{274C}|\u{2139}\u{FE0F}?|\u{1F30D}",
    )
    .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(Vec<Inline>),
    Emoji(String),
}

/// Tokenize one line of text into inline spans.
///
/// Bold spans are found first; emoji are then split out of both the plain
/// text and the bold contents. A `**` with no valid partner stays literal.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut last = 0;

    for m in BOLD_RE.find_iter(text) {
        push_with_emoji(&mut spans, &text[last..m.start()]);
        let inner = &text[m.start() + 2..m.end() - 2];
        let mut children = Vec::new();
        push_with_emoji(&mut children, inner);
        spans.push(Inline::Strong(children));
        last = m.end();
    }
    push_with_emoji(&mut spans, &text[last..]);

    spans
}

fn push_with_emoji(spans: &mut Vec<Inline>, text: &str) {
    let mut last = 0;
    for m in EMOJI_RE.find_iter(text) {
        push_text(spans, &text[last..m.start()]);
        spans.push(Inline::Emoji(m.as_str().to_string()));
        last = m.end();
    }
    push_text(spans, &text[last..]);
}

fn push_text(spans: &mut Vec<Inline>, text: &str) {
    if !text.is_empty() {
        spans.push(Inline::Text(text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    #[test]
    fn plain_text_is_one_span() {
        assert_eq!(parse_inline("Air is clean"), vec![text("Air is clean")]);
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn bold_pairs_become_strong() {
        assert_eq!(
            parse_inline("AQI is **good** today"),
            vec![
                text("AQI is "),
                Inline::Strong(vec![text("good")]),
                text(" today"),
            ]
        );
    }

    #[test]
    fn odd_marker_stays_literal() {
        assert_eq!(
            parse_inline("**PM2.5** and **PM10"),
            vec![
                Inline::Strong(vec![text("PM2.5")]),
                text(" and **PM10"),
            ]
        );
    }

    #[test]
    fn empty_bold_is_not_a_span() {
        assert_eq!(parse_inline("****"), vec![text("****")]);
    }

    #[test]
    fn triple_star_retries_one_char_later() {
        // `***x**` has no match at 0 (inner would start with `*`) but does at 1.
        assert_eq!(
            parse_inline("***x**"),
            vec![text("*"), Inline::Strong(vec![text("x")])]
        );
    }

    #[test]
    fn emoji_are_split_out_including_inside_bold() {
        let spans = parse_inline("\u{1F4A7} **Water \u{2705}** ok");
        assert_eq!(
            spans,
            vec![
                Inline::Emoji("\u{1F4A7}".to_string()),
                text(" "),
                Inline::Strong(vec![text("Water "), Inline::Emoji("\u{2705}".to_string())]),
                text(" ok"),
            ]
        );
    }

    #[test]
    fn variation_selector_is_optional() {
        assert_eq!(
            parse_inline("\u{26A0}\u{FE0F}\u{26A0}"),
            vec![
                Inline::Emoji("\u{26A0}\u{FE0F}".to_string()),
                Inline::Emoji("\u{26A0}".to_string()),
            ]
        );
    }

    #[test]
    fn unrecognized_emoji_pass_through() {
        assert_eq!(parse_inline("\u{1F600} hi"), vec![text("\u{1F600} hi")]);
    }

    #[test]
    fn every_listed_emoji_is_recognized() {
        for glyph in RECOGNIZED_EMOJI {
            assert_eq!(parse_inline(glyph), vec![Inline::Emoji(glyph.to_string())]);
        }
    }
}
