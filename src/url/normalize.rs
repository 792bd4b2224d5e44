use crate::url::DomainRoot;

/// Link prefixes that never lead to a crawlable page
const REJECTED_PREFIXES: &[&str] = &["#", "javascript:", "mailto:"];

/// Resolves an anchor `href` into an absolute URL
///
/// # Resolution Rules
///
/// 1. Empty hrefs and hrefs starting with `#`, `javascript:` or `mailto:` are dropped
/// 2. Protocol-relative hrefs (`//host/path`) take the seed's scheme
/// 3. Root-relative hrefs (`/path`) are joined onto the crawl origin
/// 4. Absolute `http://` / `https://` hrefs are kept as they are
/// 5. Anything else (`page.html`, `?q=1`, `tel:`) is dropped
///
/// The fragment is stripped from whatever survives. Domain containment is not
/// checked here; see [`DomainRoot::contains`].
///
/// # Examples
///
/// ```
/// use ripple_crawl::url::{resolve_href, DomainRoot};
///
/// let root = DomainRoot::parse("https://example.test/").unwrap();
/// assert_eq!(resolve_href("/a#x", &root).as_deref(), Some("https://example.test/a"));
/// assert_eq!(resolve_href("mailto:x@y.com", &root), None);
/// assert_eq!(resolve_href("relative.html", &root), None);
/// ```
pub fn resolve_href(href: &str, root: &DomainRoot) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || REJECTED_PREFIXES.iter().any(|p| starts_with_ignore_case(href, p)) {
        return None;
    }

    let absolute = if href.starts_with("//") {
        format!("{}:{}", root.scheme(), href)
    } else if href.starts_with('/') {
        root.join_rooted(href)
    } else if starts_with_ignore_case(href, "http://") || starts_with_ignore_case(href, "https://")
    {
        href.to_string()
    } else {
        return None;
    };

    Some(strip_fragment(absolute))
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .map(|head| head.eq_ignore_ascii_case(prefix))
        .unwrap_or(false)
}

fn strip_fragment(mut url: String) -> String {
    if let Some(idx) = url.find('#') {
        url.truncate(idx);
    }
    url
}
