//! Forum post content extraction
//!
//! Pulls the forum section, keyword tags, and post body text out of a thread
//! page. The markup conventions are those of Discuz!-style forums: the
//! `<title>` ends with `" - <section> - <site>"`, keywords live in a meta
//! tag, post bodies sit in `td.t_f` cells, and two kinds of presentation
//! noise must not leak into the text (inline status markers and the font
//! wrapper of quoted replies).
//!
//! Scraper documents are immutable, so noise is skipped during the text walk
//! rather than removed from the DOM.

use crate::extract::tex::normalize_math;
use crate::ExtractError;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

/// Extracted information from a forum post page
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedContent {
    /// The sub-forum the post belongs to, taken from the page title
    pub forum_section: String,

    /// Keyword tags from the keywords meta element, in document order
    pub tags: Vec<String>,

    /// All post bodies on the page, TeX-normalized and newline-joined
    pub text: String,
}

/// Extracts section, tags, and body text from a parsed thread page
///
/// # Arguments
///
/// * `document` - The parsed HTML document
///
/// # Returns
///
/// * `Ok(ExtractedContent)` - Successfully extracted content
/// * `Err(ExtractError::MissingTitle)` - The page has no `<title>` element;
///   this is the only structural hard failure. A title without the expected
///   `" - "` segments degrades to the whole title as the section name, which
///   then simply fails the section filter downstream.
pub fn extract_content(document: &Html) -> Result<ExtractedContent, ExtractError> {
    let title = extract_title(document).ok_or(ExtractError::MissingTitle)?;

    Ok(ExtractedContent {
        forum_section: section_from_title(&title),
        tags: extract_tags(document),
        text: extract_body_text(document),
    })
}

/// Extracts the page title text, if the element exists and is non-empty
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Takes the second-to-last `" - "` segment of the title
///
/// Thread titles follow `"<post> - <section> - <site>"`. A title with fewer
/// than two segments yields itself unchanged rather than an error.
fn section_from_title(title: &str) -> String {
    let segments: Vec<&str> = title.split(" - ").collect();
    if segments.len() >= 2 {
        segments[segments.len() - 2].to_string()
    } else {
        title.to_string()
    }
}

/// Reads keyword tags from `<meta name="keywords" content="...">`
///
/// Absent meta element or empty content both yield no tags; otherwise the
/// content splits on `,` verbatim.
fn extract_tags(document: &Html) -> Vec<String> {
    let meta_selector = match Selector::parse(r#"meta[name="keywords"]"#) {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    document
        .select(&meta_selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .filter(|content| !content.is_empty())
        .map(|content| content.split(',').map(str::to_string).collect())
        .unwrap_or_default()
}

/// Collects the visible text of every post body, TeX-normalized per body
fn extract_body_text(document: &Html) -> String {
    let body_selector = match Selector::parse("td.t_f") {
        Ok(s) => s,
        Err(_) => return String::new(),
    };

    document
        .select(&body_selector)
        .map(|cell| {
            let mut text = String::new();
            collect_visible_text(cell, &mut text);
            normalize_math(&text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Walks an element subtree accumulating text, skipping noise elements
fn collect_visible_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&text.text),
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    if !is_noise(child_element) {
                        collect_visible_text(child_element, out);
                    }
                }
            }
            _ => {}
        }
    }
}

/// True for presentation artifacts excluded from extracted text
///
/// - `i.pstatus`: inline status markers ("this post was edited by ...")
/// - `div.quote > blockquote > font[size="2"]`: quoted-reply attribution
fn is_noise(element: ElementRef) -> bool {
    let value = element.value();

    if value.name() == "i" && value.classes().any(|c| c == "pstatus") {
        return true;
    }

    if value.name() == "font" && value.attr("size") == Some("2") {
        if let Some(parent) = element.parent().and_then(ElementRef::wrap) {
            if parent.value().name() == "blockquote" {
                if let Some(grandparent) = parent.parent().and_then(ElementRef::wrap) {
                    if grandparent.value().name() == "div"
                        && grandparent.value().classes().any(|c| c == "quote")
                    {
                        return true;
                    }
                }
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn test_section_from_three_segment_title() {
        let html = r#"<html><head>
            <title>Post Title - 初等数学讨论 - SiteName</title>
            </head><body></body></html>"#;
        let content = extract_content(&parse(html)).unwrap();
        assert_eq!(content.forum_section, "初等数学讨论");
    }

    #[test]
    fn test_missing_title_is_hard_failure() {
        let html = r#"<html><head></head><body><td class="t_f">text</td></body></html>"#;
        let result = extract_content(&parse(html));
        assert!(matches!(result, Err(ExtractError::MissingTitle)));
    }

    #[test]
    fn test_title_without_segments_degrades_to_whole_title() {
        let html = r#"<html><head><title>Just a title</title></head><body></body></html>"#;
        let content = extract_content(&parse(html)).unwrap();
        assert_eq!(content.forum_section, "Just a title");
    }

    #[test]
    fn test_keywords_split_on_comma() {
        let html = r#"<html><head>
            <title>T - S - X</title>
            <meta name="keywords" content="a,b,c">
            </head><body></body></html>"#;
        let content = extract_content(&parse(html)).unwrap();
        assert_eq!(content.tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_missing_keywords_meta_yields_no_tags() {
        let html = r#"<html><head><title>T - S - X</title></head><body></body></html>"#;
        let content = extract_content(&parse(html)).unwrap();
        assert!(content.tags.is_empty());
    }

    #[test]
    fn test_empty_keywords_content_yields_no_tags() {
        let html = r#"<html><head>
            <title>T - S - X</title>
            <meta name="keywords" content="">
            </head><body></body></html>"#;
        let content = extract_content(&parse(html)).unwrap();
        assert!(content.tags.is_empty());
    }

    #[test]
    fn test_body_text_from_post_cells() {
        let html = r#"<html><head><title>T - S - X</title></head><body>
            <table><tr><td class="t_f">first post</td></tr></table>
            <table><tr><td class="t_f">second post</td></tr></table>
            </body></html>"#;
        let content = extract_content(&parse(html)).unwrap();
        assert_eq!(content.text, "first post\nsecond post");
    }

    #[test]
    fn test_body_tex_is_normalized() {
        let html = r#"<html><head><title>T - S - X</title></head><body>
            <table><tr><td class="t_f">some $x^2$ text</td></tr></table>
            </body></html>"#;
        let content = extract_content(&parse(html)).unwrap();
        assert_eq!(content.text, "some [imath]x^2[/imath] text");
    }

    #[test]
    fn test_pstatus_marker_is_stripped() {
        let html = r#"<html><head><title>T - S - X</title></head><body>
            <table><tr><td class="t_f"><i class="pstatus">edited at noon</i>real content</td></tr></table>
            </body></html>"#;
        let content = extract_content(&parse(html)).unwrap();
        assert_eq!(content.text, "real content");
    }

    #[test]
    fn test_quote_attribution_font_is_stripped() {
        let html = r#"<html><head><title>T - S - X</title></head><body>
            <table><tr><td class="t_f">
              <div class="quote"><blockquote><font size="2">poster said at 12:00</font>quoted body</blockquote></div>reply text</td></tr></table>
            </body></html>"#;
        let content = extract_content(&parse(html)).unwrap();
        assert!(!content.text.contains("poster said"));
        assert!(content.text.contains("quoted body"));
        assert!(content.text.contains("reply text"));
    }

    #[test]
    fn test_font_outside_quote_is_kept() {
        let html = r#"<html><head><title>T - S - X</title></head><body>
            <table><tr><td class="t_f"><font size="2">emphasized</font></td></tr></table>
            </body></html>"#;
        let content = extract_content(&parse(html)).unwrap();
        assert_eq!(content.text, "emphasized");
    }

    #[test]
    fn test_page_without_post_cells_has_empty_text() {
        let html = r#"<html><head><title>T - S - X</title></head><body><p>nav</p></body></html>"#;
        let content = extract_content(&parse(html)).unwrap();
        assert_eq!(content.text, "");
    }
}
