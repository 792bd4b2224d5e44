//! Ripple-Crawl: a bounded same-domain web crawler
//!
//! Starting from a seed URL, this crate discovers pages on the same domain by
//! following hyperlinks, honours the site's robots.txt disallow list, never
//! crawls a URL twice, and records every page's title next to its URL until a
//! page ceiling is reached.

pub mod config;
pub mod crawler;
pub mod output;
pub mod robots;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Ripple-Crawl operations
///
/// Only setup can fail a crawl. Once the crawl loop is running, fetch,
/// robots.txt and sink failures are absorbed and logged.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Frontier errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrontierError {
    #[error("Dequeue called on an empty frontier")]
    Empty,
}

/// Result type alias for Ripple-Crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, CrawlContext, Coordinator};
pub use output::{CrawlReport, PageRecord};
pub use state::{Frontier, VisitedSet};
pub use crate::url::{fingerprint, resolve_href, DomainRoot};
