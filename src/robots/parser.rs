//! Disallow-list extraction and URL filtering
//!
//! The default matching is deliberately loose: user-agent groups are ignored
//! and a URL is blocked if it contains any disallowed path anywhere in it.
//! This can over-block (`/admin` also blocks `/blog/admin-tips`) and
//! under-block (wildcards are matched literally). `RobotsMatching::Standard`
//! switches to group-aware matching via the robotstxt crate.

use crate::config::RobotsMatching;
use robotstxt::DefaultMatcher;

/// Collects the path of every `Disallow:` directive in a robots.txt body
///
/// Directive names are matched case-insensitively, trailing `#` comments are
/// dropped, and empty values (which allow everything) are skipped. The
/// user-agent group a directive belongs to is ignored.
///
/// # Examples
///
/// ```
/// use ripple_crawl::robots::parse_disallow_list;
///
/// let body = "User-agent: *\nDisallow: /private\nAllow: /public\nDisallow:\n";
/// assert_eq!(parse_disallow_list(body), vec!["/private".to_string()]);
/// ```
pub fn parse_disallow_list(body: &str) -> Vec<String> {
    body.lines()
        .filter_map(|line| {
            let line = line.split('#').next().unwrap_or("").trim();
            let (key, value) = line.split_once(':')?;
            if !key.trim().eq_ignore_ascii_case("disallow") {
                return None;
            }
            value.split_whitespace().next().map(str::to_string)
        })
        .collect()
}

/// Robots.txt predicate consulted for every discovered link
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct RobotsFilter {
    disallowed: Vec<String>,
    body: String,
    matching: RobotsMatching,
    user_agent: String,
}

impl RobotsFilter {
    /// Creates a filter that allows every URL
    ///
    /// Used when robots.txt is disabled or could not be fetched.
    pub fn allow_all() -> Self {
        Self {
            disallowed: Vec::new(),
            body: String::new(),
            matching: RobotsMatching::Substring,
            user_agent: String::new(),
        }
    }

    /// Builds a filter from a robots.txt body
    ///
    /// # Arguments
    ///
    /// * `body` - Raw robots.txt content
    /// * `matching` - How rules are applied to URLs
    /// * `user_agent` - Product token used for group selection in standard matching
    pub fn from_body(body: &str, matching: RobotsMatching, user_agent: &str) -> Self {
        Self {
            disallowed: parse_disallow_list(body),
            body: body.to_string(),
            matching,
            user_agent: user_agent.to_string(),
        }
    }

    /// Builds a substring-matching filter from an explicit disallow list
    pub fn from_disallowed<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            disallowed: paths.into_iter().map(Into::into).collect(),
            ..Self::allow_all()
        }
    }

    /// The collected disallow paths
    pub fn disallowed(&self) -> &[String] {
        &self.disallowed
    }

    pub fn matching(&self) -> RobotsMatching {
        self.matching
    }

    /// Checks whether a URL may be crawled
    ///
    /// # Returns
    ///
    /// * `true` - If no rule blocks the URL
    /// * `false` - If a disallow rule matches
    pub fn is_allowed(&self, url: &str) -> bool {
        match self.matching {
            RobotsMatching::Substring => !self
                .disallowed
                .iter()
                .any(|path| url.contains(path.as_str())),
            RobotsMatching::Standard => {
                if self.body.is_empty() {
                    return true;
                }
                let mut matcher = DefaultMatcher::default();
                matcher.one_agent_allowed_by_robots(&self.body, &self.user_agent, url)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_all() {
        let robots = RobotsFilter::allow_all();
        assert!(robots.is_allowed("https://site/any/path"));
        assert!(robots.is_allowed("https://site/admin"));
    }

    #[test]
    fn test_private_blocked_public_allowed() {
        let robots = RobotsFilter::from_disallowed(["/private"]);
        assert!(!robots.is_allowed("https://site/private/x"));
        assert!(robots.is_allowed("https://site/public/x"));
    }

    #[test]
    fn test_substring_matches_anywhere() {
        let robots = RobotsFilter::from_disallowed(["/admin"]);
        assert!(!robots.is_allowed("https://site/admin"));
        assert!(!robots.is_allowed("https://site/blog/admin-tips"));
        assert!(robots.is_allowed("https://site/administer"));
    }

    #[test]
    fn test_parse_ignores_user_agent_groups() {
        let body = "User-agent: BadBot\nDisallow: /bad\n\nUser-agent: *\nDisallow: /private\n";
        assert_eq!(parse_disallow_list(body), vec!["/bad", "/private"]);

        let robots = RobotsFilter::from_body(body, RobotsMatching::Substring, "Ripple-Crawl");
        assert!(!robots.is_allowed("https://site/bad/page"));
        assert!(!robots.is_allowed("https://site/private"));
    }

    #[test]
    fn test_parse_skips_noise() {
        let body = "# comment\nAllow: /open\nDisallow:\ndisallow: /lower  # trailing\nDISALLOW:/tight\nSitemap: https://site/sitemap.xml\nnot a directive\n";
        assert_eq!(parse_disallow_list(body), vec!["/lower", "/tight"]);
    }

    #[test]
    fn test_parse_empty_body() {
        assert!(parse_disallow_list("").is_empty());
        let robots = RobotsFilter::from_body("", RobotsMatching::Substring, "Ripple-Crawl");
        assert!(robots.is_allowed("https://site/anything"));
    }

    #[test]
    fn test_standard_matching_respects_groups() {
        let body = "User-agent: BadBot\nDisallow: /\n\nUser-agent: *\nDisallow: /private\n";
        let robots = RobotsFilter::from_body(body, RobotsMatching::Standard, "Ripple-Crawl");

        assert_eq!(robots.matching(), RobotsMatching::Standard);
        assert!(robots.is_allowed("https://site/page"));
        assert!(!robots.is_allowed("https://site/private/x"));
    }

    #[test]
    fn test_standard_matching_is_prefix_based() {
        let body = "User-agent: *\nDisallow: /admin\n";
        let robots = RobotsFilter::from_body(body, RobotsMatching::Standard, "Ripple-Crawl");

        assert!(!robots.is_allowed("https://site/admin/users"));
        assert!(robots.is_allowed("https://site/blog/admin-tips"));
    }
}
