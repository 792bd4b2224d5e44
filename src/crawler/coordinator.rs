//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that ties the other components
//! together:
//! - Seeding the frontier from the seed page
//! - Draining the frontier one fetch at a time
//! - Dispatching link extraction onto tracked tasks
//! - Joining every extraction task and producing the final report
//!
//! Exactly one fetch is in flight at a time. Awaiting a fetch result is the
//! only suspension point in the loop, and no lock is held across it.

use crate::config::Config;
use crate::crawler::context::CrawlContext;
use crate::crawler::extractor::LinkExtractor;
use crate::crawler::fetcher::FetchResult;
use crate::crawler::parser::Document;
use crate::output::{CrawlReport, StatsCollector};
use crate::CrawlError;
use chrono::Utc;
use std::sync::Arc;
use tokio::task::{JoinError, JoinSet};

/// Lifecycle of a crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlPhase {
    /// Loading robots.txt and fetching the seed page
    Seeding,
    /// Taking URLs off the frontier until it empties or the ceiling is hit
    Draining,
    /// Loop finished, extraction tasks joined
    Drained,
}

/// Main crawler coordinator structure
pub struct Coordinator {
    ctx: Arc<CrawlContext>,
    phase: CrawlPhase,
    pages_fetched: usize,
}

impl Coordinator {
    /// Creates a coordinator from configuration
    ///
    /// Robots.txt is loaded here, so construction is the first part of the
    /// seeding phase.
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(CrawlError)` - Invalid seed, HTTP client or results file failure
    pub async fn new(config: Config) -> Result<Self, CrawlError> {
        let ctx = CrawlContext::from_config(&config).await?;
        Ok(Self::with_context(ctx))
    }

    /// Creates a coordinator around an existing context
    pub fn with_context(ctx: CrawlContext) -> Self {
        Self {
            ctx: Arc::new(ctx),
            phase: CrawlPhase::Seeding,
            pages_fetched: 0,
        }
    }

    pub fn context(&self) -> &Arc<CrawlContext> {
        &self.ctx
    }

    pub fn phase(&self) -> CrawlPhase {
        self.phase
    }

    fn transition(&mut self, next: CrawlPhase) {
        tracing::debug!("Crawl phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    /// Runs the crawl to completion
    ///
    /// Never fails: fetch failures skip the URL, sink failures are logged.
    /// Returns once the frontier is empty (with no extraction still running)
    /// or the visited ceiling is reached, and every extraction task has
    /// finished.
    pub async fn run(&mut self) -> CrawlReport {
        let started_at = Utc::now();
        tracing::info!(
            "Starting crawl of {} (ceiling {} pages)",
            self.ctx.root,
            self.ctx.max_pages
        );

        let stats = StatsCollector::spawn(
            Arc::clone(&self.ctx.frontier),
            Arc::clone(&self.ctx.visited),
            self.ctx.stats_interval,
        );

        self.seed().await;
        self.transition(CrawlPhase::Draining);

        let mut extractions = JoinSet::new();
        self.drain(&mut extractions).await;

        while let Some(joined) = extractions.join_next().await {
            log_join(joined);
        }
        self.transition(CrawlPhase::Drained);

        let stats = stats.stop().await;
        let report = CrawlReport {
            started_at,
            finished_at: Utc::now(),
            total_enqueued: self.ctx.frontier.total_enqueued(),
            frontier_size: self.ctx.frontier.size(),
            visited_size: self.ctx.visited.size(),
            pages_fetched: self.pages_fetched,
            stats,
        };

        tracing::info!(
            "Crawl completed: {} visited, {} fetched, {} still queued",
            report.visited_size,
            report.pages_fetched,
            report.frontier_size
        );

        report
    }

    /// Marks the seed visited, fetches it and extracts its links inline
    async fn seed(&mut self) {
        let seed = self.ctx.root.as_str().to_string();
        self.ctx.visited.add(&seed);

        match self.fetch(seed.clone()).await {
            Some(document) => {
                let extractor = LinkExtractor::new(Arc::clone(&self.ctx));
                let admitted = extractor.extract(&document, &seed);
                tracing::info!("Seed page yielded {} links", admitted.len());
            }
            None => tracing::warn!("Seed page {} could not be fetched", seed),
        }
    }

    /// Drains the frontier, spawning one extraction task per fetched page
    ///
    /// The ceiling is checked at the top of each iteration. An empty
    /// frontier only ends the loop once no extraction task is left that
    /// could still enqueue links.
    async fn drain(&mut self, extractions: &mut JoinSet<()>) {
        loop {
            if self.ctx.visited.size() >= self.ctx.max_pages {
                tracing::info!("Visited ceiling of {} reached", self.ctx.max_pages);
                break;
            }

            let Some(url) = self.ctx.frontier.try_dequeue() else {
                match extractions.join_next().await {
                    Some(joined) => {
                        log_join(joined);
                        continue;
                    }
                    None => {
                        tracing::info!("Frontier is empty, crawl complete");
                        break;
                    }
                }
            };

            if !self.ctx.visited.add(&url) {
                tracing::debug!("Skipping already visited {}", url);
                continue;
            }

            let Some(document) = self.fetch(url.clone()).await else {
                continue;
            };

            let extractor = LinkExtractor::new(Arc::clone(&self.ctx));
            extractions.spawn_blocking(move || {
                extractor.extract(&document, &url);
            });

            if self.pages_fetched % 10 == 0 {
                tracing::info!(
                    "Progress: {} pages fetched, {} visited, {} in frontier",
                    self.pages_fetched,
                    self.ctx.visited.size(),
                    self.ctx.frontier.size()
                );
            }
        }
    }

    /// Fetches on a separate task and waits for its one-shot result
    async fn fetch(&mut self, url: String) -> Option<Document> {
        let receiver = self.ctx.fetcher.spawn_fetch(url.clone());

        let result = match receiver.await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!("Fetch task for {} ended without a result", url);
                return None;
            }
        };

        match result {
            FetchResult::Success(document) => {
                self.pages_fetched += 1;
                Some(document)
            }
            FetchResult::Exhausted { attempts } => {
                tracing::warn!("Skipping {} after {} failed attempts", url, attempts);
                None
            }
            FetchResult::Malformed { reason } => {
                tracing::warn!("Skipping {}: unreadable body ({})", url, reason);
                None
            }
        }
    }
}

fn log_join(joined: Result<(), JoinError>) {
    if let Err(e) = joined {
        tracing::error!("Link extraction task failed: {}", e);
    }
}

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client and load robots.txt
/// 2. Open the results file
/// 3. Fetch the seed page and follow same-domain links
/// 4. Stop at the page ceiling or when nothing is left to crawl
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl ran to completion
/// * `Err(CrawlError)` - Setup failed before crawling started
pub async fn crawl(config: Config) -> Result<CrawlReport, CrawlError> {
    let mut coordinator = Coordinator::new(config).await?;
    Ok(coordinator.run().await)
}
