//! Link discovery and page recording
//!
//! For every anchor on a fetched page the extractor resolves the href,
//! keeps it only if it stays inside the crawl domain, is allowed by
//! robots.txt and has not been visited, and enqueues what survives. It then
//! appends the page's record to the sink.

use crate::crawler::context::CrawlContext;
use crate::crawler::parser::Document;
use crate::output::PageRecord;
use crate::url::resolve_href;
use std::sync::Arc;

/// Turns fetched documents into frontier entries and page records
#[derive(Clone)]
pub struct LinkExtractor {
    ctx: Arc<CrawlContext>,
}

impl LinkExtractor {
    pub fn new(ctx: Arc<CrawlContext>) -> Self {
        Self { ctx }
    }

    /// Returns the admissible URLs linked from `document`, in document order
    ///
    /// Does not touch the frontier or the sink. The visited check reflects
    /// the set at call time; a URL can still be visited before it is dequeued.
    pub fn discover(&self, document: &Document) -> Vec<String> {
        document
            .hrefs()
            .iter()
            .filter_map(|href| resolve_href(href, &self.ctx.root))
            .filter(|url| self.admits(url))
            .collect()
    }

    fn admits(&self, url: &str) -> bool {
        if !self.ctx.root.contains(url) {
            return false;
        }
        if !self.ctx.robots.is_allowed(url) {
            tracing::debug!("Disallowed by robots.txt: {}", url);
            return false;
        }
        !self.ctx.visited.contains(url)
    }

    /// Enqueues every admissible link and records the page
    ///
    /// The record is keyed to `current_url`, the page that was fetched. A
    /// sink failure is logged and does not affect link processing.
    ///
    /// # Returns
    ///
    /// The URLs that were enqueued
    pub fn extract(&self, document: &Document, current_url: &str) -> Vec<String> {
        let admitted = self.discover(document);
        for url in &admitted {
            self.ctx.frontier.enqueue(url.as_str());
        }

        tracing::debug!(
            "{}: {} of {} links enqueued",
            current_url,
            admitted.len(),
            document.hrefs().len()
        );

        let record = PageRecord::new(document.title(), current_url);
        if let Err(e) = self.ctx.sink.append(&record) {
            tracing::error!("Failed to write record for {}: {}", current_url, e);
        }

        admitted
    }
}
