use crate::{UrlError, UrlResult};
use url::Url;

/// The fixed domain a crawl is confined to
///
/// Holds two views of the seed URL: the canonical `prefix` every admitted URL
/// must start with, and the `origin` (scheme, host and port, no trailing slash)
/// used to absolutize root-relative links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRoot {
    prefix: String,
    origin: String,
    scheme: String,
}

impl DomainRoot {
    /// Parses a seed URL into a domain root
    ///
    /// The URL crate canonicalizes `https://example.test` to
    /// `https://example.test/`, so the prefix always ends in a path separator and
    /// can never match a longer host such as `https://example.testing/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ripple_crawl::url::DomainRoot;
    ///
    /// let root = DomainRoot::parse("https://Example.test").unwrap();
    /// assert_eq!(root.as_str(), "https://example.test/");
    /// assert_eq!(root.join_rooted("/a"), "https://example.test/a");
    /// assert!(root.contains("https://example.test/a"));
    /// assert!(!root.contains("https://example.testing/a"));
    /// ```
    pub fn parse(seed: &str) -> UrlResult<Self> {
        let mut url = Url::parse(seed.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(UrlError::InvalidScheme(url.scheme().to_string()));
        }
        if url.host_str().is_none() {
            return Err(UrlError::MissingDomain);
        }

        url.set_fragment(None);

        Ok(Self {
            prefix: url.as_str().to_string(),
            origin: url.origin().ascii_serialization(),
            scheme: url.scheme().to_string(),
        })
    }

    /// The canonical seed URL, also the containment prefix
    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    /// Scheme of the seed, used for protocol-relative links
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns true if `url` lies inside this crawl's domain
    pub fn contains(&self, url: &str) -> bool {
        url.starts_with(&self.prefix)
    }

    /// Absolutizes a root-relative path (`/a/b`) against the origin
    pub fn join_rooted(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }

    /// Location of the site's robots.txt
    pub fn robots_url(&self) -> String {
        self.join_rooted("/robots.txt")
    }
}

impl std::fmt::Display for DomainRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.prefix)
    }
}
