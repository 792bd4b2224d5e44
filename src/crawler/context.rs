//! Everything a crawl shares between its components.

use crate::config::{validate, Config};
use crate::crawler::fetcher::Fetcher;
use crate::output::{FileSink, RecordSink};
use crate::robots::{fetch_robots, RobotsFilter};
use crate::state::{Frontier, VisitedSet};
use crate::url::DomainRoot;
use crate::CrawlError;
use std::sync::Arc;
use std::time::Duration;

/// Shared crawl state, passed explicitly to every component
///
/// Frontier, visited set and sink each carry their own lock; the context
/// itself is immutable and shared behind an `Arc`.
pub struct CrawlContext {
    pub root: DomainRoot,
    pub frontier: Arc<Frontier>,
    pub visited: Arc<VisitedSet>,
    pub robots: RobotsFilter,
    pub fetcher: Fetcher,
    pub sink: Arc<dyn RecordSink>,

    /// Visited ceiling
    pub max_pages: usize,

    /// Statistics sampling period
    pub stats_interval: Duration,
}

impl CrawlContext {
    /// Creates a context with empty state, a 500-page ceiling and 1s sampling
    pub fn new(
        root: DomainRoot,
        fetcher: Fetcher,
        robots: RobotsFilter,
        sink: Arc<dyn RecordSink>,
    ) -> Self {
        Self {
            root,
            frontier: Arc::new(Frontier::new()),
            visited: Arc::new(VisitedSet::new()),
            robots,
            fetcher,
            sink,
            max_pages: 500,
            stats_interval: Duration::from_secs(1),
        }
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn with_stats_interval(mut self, interval: Duration) -> Self {
        self.stats_interval = interval;
        self
    }

    /// Builds a context from configuration
    ///
    /// Validates the configuration, builds the HTTP client, loads robots.txt
    /// (failures degrade to allow-all) and opens the results file.
    ///
    /// # Errors
    ///
    /// Fails on a configuration that does not validate, an HTTP client that
    /// cannot be built, or a results file that cannot be opened.
    pub async fn from_config(config: &Config) -> Result<Self, CrawlError> {
        validate(config)?;
        let root = DomainRoot::parse(&config.crawler.seed_url)?;
        let fetcher = Fetcher::from_config(config)?;
        let robots = fetch_robots(
            fetcher.client(),
            &root,
            &config.robots,
            &config.user_agent.crawler_name,
        )
        .await;
        let sink = FileSink::open(&config.output.results_path)?;
        tracing::info!("Appending page records to {}", sink.path().display());

        Ok(Self::new(root, fetcher, robots, Arc::new(sink))
            .with_max_pages(config.crawler.max_pages)
            .with_stats_interval(Duration::from_millis(config.crawler.stats_interval_ms)))
    }
}
