//! Robots.txt handling module
//!
//! robots.txt is fetched once, before the crawl starts, and the resulting
//! filter is consulted for every discovered link.

mod parser;

pub use parser::{parse_disallow_list, RobotsFilter};

use crate::config::RobotsConfig;
use crate::url::DomainRoot;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Fetches and parses robots.txt for the crawl's domain
///
/// A single GET with no retries. Any failure (transport error, non-200 status,
/// unreadable body) is logged and yields an allow-all filter, so the crawl
/// proceeds unrestricted.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `root` - The crawl's domain root
/// * `config` - robots.txt settings
/// * `crawler_name` - Product token used by standard matching
pub async fn fetch_robots(
    client: &Client,
    root: &DomainRoot,
    config: &RobotsConfig,
    crawler_name: &str,
) -> RobotsFilter {
    if !config.enabled {
        tracing::info!("robots.txt handling disabled, nothing is disallowed");
        return RobotsFilter::allow_all();
    }

    let robots_url = root.robots_url();
    let response = match client
        .get(&robots_url)
        .timeout(Duration::from_secs(config.timeout_secs))
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Failed to fetch {}: {}; crawling unrestricted", robots_url, e);
            return RobotsFilter::allow_all();
        }
    };

    if response.status() != StatusCode::OK {
        tracing::warn!(
            "{} returned {}; crawling unrestricted",
            robots_url,
            response.status()
        );
        return RobotsFilter::allow_all();
    }

    match response.text().await {
        Ok(body) => {
            let filter = RobotsFilter::from_body(&body, config.matching, crawler_name);
            tracing::info!(
                "Loaded {} disallow rules from {} ({:?} matching)",
                filter.disallowed().len(),
                robots_url,
                config.matching
            );
            filter
        }
        Err(e) => {
            tracing::warn!("Failed to read {}: {}; crawling unrestricted", robots_url, e);
            RobotsFilter::allow_all()
        }
    }
}
