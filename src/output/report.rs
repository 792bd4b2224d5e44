//! Final crawl report

use crate::output::stats::CrawlerStats;
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Summary emitted once the crawl has drained
#[derive(Debug, Clone)]
pub struct CrawlReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    /// Every enqueue ever made, duplicates included
    pub total_enqueued: usize,

    /// URLs still pending when the crawl stopped
    pub frontier_size: usize,

    /// Distinct URLs handed to the fetcher
    pub visited_size: usize,

    /// Pages whose fetch produced a document
    pub pages_fetched: usize,

    pub stats: CrawlerStats,
}

impl CrawlReport {
    /// Renders the report as printed to stdout
    pub fn render(&self) -> String {
        let mut out = String::new();
        let duration = self.finished_at - self.started_at;

        // Writing into a String cannot fail
        let _ = writeln!(out, "\n------------------CRAWLER STATS------------------");
        let _ = writeln!(
            out,
            "Started: {}  Finished: {}  ({}s)",
            self.started_at.format("%Y-%m-%d %H:%M:%S UTC"),
            self.finished_at.format("%Y-%m-%d %H:%M:%S UTC"),
            duration.num_seconds()
        );
        let _ = writeln!(out, "Total queued: {}", self.total_enqueued);
        let _ = writeln!(out, "To be crawled (Queue) size: {}", self.frontier_size);
        let _ = writeln!(out, "Crawled size: {}", self.visited_size);
        let _ = writeln!(out, "Pages fetched: {}", self.pages_fetched);

        let _ = writeln!(out, "Pages crawled per minute:");
        for (minutes, visited) in &self.stats.visited_series {
            let _ = writeln!(out, "{:.6} {}", minutes, visited);
        }

        let _ = writeln!(out, "\nCrawl to Queued Ratio per minute:");
        for (minutes, ratio) in &self.stats.ratio_series {
            let _ = writeln!(out, "{:.6} {:.6}", minutes, ratio);
        }

        out
    }
}

/// Prints the report to stdout
pub fn print_report(report: &CrawlReport) {
    print!("{}", report.render());
}
