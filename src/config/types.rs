use serde::Deserialize;

/// Main configuration structure for Ripple-Crawl
///
/// Every section is optional; missing keys fall back to the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub fetch: FetchConfig,
    pub robots: RobotsConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Crawl scope configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Domain root the crawl starts from; discovered links must share this prefix
    #[serde(rename = "seed-url")]
    pub seed_url: String,

    /// Ceiling on the number of pages marked visited
    #[serde(rename = "max-pages")]
    pub max_pages: usize,

    /// Statistics sampling period (milliseconds)
    #[serde(rename = "stats-interval-ms")]
    pub stats_interval_ms: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            seed_url: "https://www.sjsu.edu/".to_string(),
            max_pages: 500,
            stats_interval_ms: 1000,
        }
    }
}

/// Page fetch behaviour
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Total attempts per URL, first try included
    #[serde(rename = "max-attempts")]
    pub max_attempts: u32,

    /// Backoff step; attempt `i` waits `i * step` before being sent
    #[serde(rename = "backoff-step-ms")]
    pub backoff_step_ms: u64,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Redirects followed before a request is aborted
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            backoff_step_ms: 2000,
            timeout_secs: 10,
            max_redirects: 5,
        }
    }
}

/// How disallow rules are matched against discovered URLs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RobotsMatching {
    /// A URL is blocked when it contains any disallowed path anywhere in it
    #[default]
    Substring,
    /// Group-aware robots.txt matching for our user agent
    Standard,
}

/// robots.txt handling
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RobotsConfig {
    /// When false the crawl never asks for robots.txt
    pub enabled: bool,

    /// Timeout for the single robots.txt request (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    pub matching: RobotsMatching,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_secs: 8,
            matching: RobotsMatching::Substring,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,
}

impl UserAgentConfig {
    /// Value sent in the `User-Agent` header, e.g. `Ripple-Crawl/1.0`
    pub fn header_value(&self) -> String {
        format!("{}/{}", self.crawler_name, self.crawler_version)
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "Ripple-Crawl".to_string(),
            crawler_version: "1.0".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File page records are appended to
    #[serde(rename = "results-path")]
    pub results_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_path: "result.txt".to_string(),
        }
    }
}
