//! End-to-end behaviour of `render_content` on report section text.

use dashboard_markup::render_content;

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

// =========================================================================
// Lists
// =========================================================================

#[test]
fn heading_list_and_trailing_paragraph() {
    let html = render_content("# Title\n\n- item1\n- item2\n\nMore text").into_string();

    assert_eq!(count(&html, "<ul"), 1);
    assert_eq!(count(&html, "</ul>"), 1);
    assert_eq!(count(&html, "<li"), 2);

    let ul_start = html.find("<ul").unwrap();
    let ul_end = html.find("</ul>").unwrap();
    let first_li = html.find("<li").unwrap();
    let last_li_end = html.rfind("</li>").unwrap();
    assert!(ul_start < first_li && last_li_end < ul_end);

    assert!(html.starts_with(r#"<h3 class="text-xl font-semibold mt-4 mb-2">Title</h3>"#));
    assert!(html.ends_with(r#"<p class="mb-3">More text</p>"#));
}

#[test]
fn heading_first_output_opens_with_the_heading() {
    let html = render_content("## Outlook\nHazy afternoon").into_string();

    assert!(html.starts_with("<h4"));
    assert!(!html.contains("<p><h"));
    assert!(!html.contains(r#"<p class="mb-3"><h"#));
    assert!(html.ends_with(r#"<p class="mb-3">Hazy afternoon</p>"#));
    assert_eq!(count(&html, "<p"), count(&html, "</p>"));
}

#[test]
fn bare_dash_renders_literally() {
    let html = render_content("- \n- wear a mask").into_string();

    assert_eq!(count(&html, "<li"), 1);
    assert!(!html.contains("<li class=\"ml-5 mb-1\"></li>"));
    assert!(html.starts_with(r#"<p class="mb-3">-</p>"#));
}

#[test]
fn content_without_lists_has_no_list_container() {
    let html = render_content("## Summary\n\nAir quality is **moderate**.").into_string();
    assert!(!html.contains("<ul"));
    assert!(!html.contains("<li"));
}

#[test]
fn content_starting_mid_list() {
    let html = render_content("- first\n- second\nClosing remark").into_string();
    assert!(html.starts_with(r#"<ul class="list-disc my-3">"#));
    assert_eq!(count(&html, "<li"), 2);
    assert!(html.ends_with(r#"<p class="mb-3">Closing remark</p>"#));
}

#[test]
fn content_ending_mid_list() {
    let html = render_content("Recommendations:\n- wear a mask\n- avoid parks").into_string();
    assert!(html.starts_with(r#"<p class="mb-3">Recommendations:</p>"#));
    assert!(html.ends_with("</li></ul>"));
    assert_eq!(count(&html, "<ul"), 1);
}

#[test]
fn separate_runs_get_separate_containers() {
    let html = render_content("- a\n- b\n\nBetween\n\n- c").into_string();
    assert_eq!(count(&html, "<ul"), 2);
    assert_eq!(count(&html, "</ul>"), 2);
    assert_eq!(count(&html, "<li"), 3);
}

// =========================================================================
// Headings, bold, emoji
// =========================================================================

#[test]
fn zero_headings() {
    let html = render_content("Just a sentence.").into_string();
    assert!(!html.contains("<h"));
    assert_eq!(html, r#"<p class="mb-3">Just a sentence.</p>"#);
}

#[test]
fn three_marker_heading_is_not_misread_as_one() {
    let html = render_content("### Detail").into_string();
    assert_eq!(html, r#"<h5 class="text-base font-semibold mt-2 mb-1">Detail</h5>"#);
    assert!(!html.contains('#'));
}

#[test]
fn unmatched_bold_markers_survive_literally() {
    let html = render_content("**Ozone** is high and **PM10 too").into_string();
    assert_eq!(count(&html, "<strong>"), 1);
    assert!(html.contains("**PM10 too"));
    assert!(html.contains("is high and"));
}

#[test]
fn single_bold_marker_only() {
    let html = render_content("rating ** stars").into_string();
    assert_eq!(html, r#"<p class="mb-3">rating ** stars</p>"#);
}

#[test]
fn bold_does_not_span_lines() {
    let html = render_content("**Ozone\nlevels** rising").into_string();
    assert!(!html.contains("<strong>"));
    assert_eq!(html, "<p class=\"mb-3\">**Ozone\nlevels** rising</p>");
}

#[test]
fn recognised_emoji_in_heading_are_enlarged() {
    let html = render_content("# \u{1F30D} Global outlook").into_string();
    assert!(html.contains("<span class=\"text-xl mr-1\">\u{1F30D}</span> Global outlook"));
}

// =========================================================================
// Wrapping guard
// =========================================================================

#[test]
fn empty_input_is_single_empty_paragraph() {
    assert_eq!(render_content("").as_str(), r#"<p class="mb-3"></p>"#);
}

#[test]
fn text_without_breaks_is_wrapped_once() {
    let html = render_content("Line one\nLine two").into_string();
    assert_eq!(count(&html, "<p"), 1);
    assert!(html.starts_with("<p"));
    assert!(html.ends_with("</p>"));
}

#[test]
fn every_open_tag_is_closed() {
    let raw = "# Air\n\n**Status:** \u{26A0}\u{FE0F} elevated\n\n- **PM2.5**: 35\n- NO2: 12\n\n## Advice\nStay hydrated \u{1F4A7}";
    let html = render_content(raw).into_string();
    for tag in ["p", "ul", "li", "strong", "span", "h3", "h4"] {
        assert_eq!(
            count(&html, &format!("<{tag}")),
            count(&html, &format!("</{tag}>")),
            "unbalanced <{tag}> in {html}"
        );
    }
}
