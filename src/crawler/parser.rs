//! HTML parser producing the queryable document handed to link extraction
//!
//! This module extracts:
//! - Raw `href` values of every `<a href>` in document order
//! - The page title (from the first `<title>` tag)
//!
//! The `scraper` tree is not `Send`, so it is dropped once these values are
//! pulled out; the resulting [`Document`] moves freely between tasks.

use scraper::{Html, Selector};

/// A parsed page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    title: String,
    hrefs: Vec<String>,
}

impl Document {
    /// Builds a document from already-extracted parts
    pub fn new(title: impl Into<String>, hrefs: Vec<String>) -> Self {
        Self {
            title: title.into(),
            hrefs,
        }
    }

    /// Trimmed title text; empty when the page has none
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Raw anchor hrefs, unresolved and unfiltered
    pub fn hrefs(&self) -> &[String] {
        &self.hrefs
    }
}

/// Parses HTML content into a [`Document`]
///
/// HTML parsing is error-tolerant: malformed markup still yields a document,
/// possibly with no links.
///
/// # Example
///
/// ```
/// use ripple_crawl::crawler::parse_document;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let document = parse_document(html);
/// assert_eq!(document.title(), "Test");
/// assert_eq!(document.hrefs(), ["/page"]);
/// ```
pub fn parse_document(html: &str) -> Document {
    let document = Html::parse_document(html);

    Document {
        title: extract_title(&document),
        hrefs: extract_hrefs(&document),
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> String {
    let Ok(title_selector) = Selector::parse("title") else {
        return String::new();
    };

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Extracts every anchor href, in document order
fn extract_hrefs(document: &Html) -> Vec<String> {
    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title() {
        let html = r#"<html><head><title>Test Page</title></head><body></body></html>"#;
        assert_eq!(parse_document(html).title(), "Test Page");
    }

    #[test]
    fn test_extract_title_with_whitespace() {
        let html = "<html><head><title>\n  Test Page  \n</title></head><body></body></html>";
        assert_eq!(parse_document(html).title(), "Test Page");
    }

    #[test]
    fn test_no_title() {
        let html = r#"<html><head></head><body></body></html>"#;
        assert_eq!(parse_document(html).title(), "");
    }

    #[test]
    fn test_hrefs_in_document_order() {
        let html = r##"
            <html>
            <body>
                <a href="/a">A</a>
                <a href="#top">Top</a>
                <a href="mailto:x@y.com">Mail</a>
                <a href="http://other.test/z">Other</a>
            </body>
            </html>
        "##;
        let document = parse_document(html);
        assert_eq!(
            document.hrefs(),
            ["/a", "#top", "mailto:x@y.com", "http://other.test/z"]
        );
    }

    #[test]
    fn test_anchor_without_href_ignored() {
        let html = r#"<html><body><a name="anchor">No link</a><a href="/b">B</a></body></html>"#;
        assert_eq!(parse_document(html).hrefs(), ["/b"]);
    }

    #[test]
    fn test_other_elements_ignored() {
        let html = r#"<html><head><link rel="stylesheet" href="/style.css"></head>
            <body><img src="/img.png"><script src="/app.js"></script></body></html>"#;
        assert!(parse_document(html).hrefs().is_empty());
    }

    #[test]
    fn test_malformed_markup_still_parses() {
        let html = "<html><head><title>Broken</title><body><p><a href='/x'>unclosed<div>";
        let document = parse_document(html);
        assert_eq!(document.hrefs(), ["/x"]);
    }

    #[test]
    fn test_non_html_body() {
        let document = parse_document("{\"json\": true}");
        assert_eq!(document.title(), "");
        assert!(document.hrefs().is_empty());
    }
}
