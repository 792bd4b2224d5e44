//! Output module for crawl records and reports
//!
//! This module handles:
//! - Appending one record per parsed page to a durable sink
//! - Sampling frontier and visited-set sizes while the crawl runs
//! - Rendering the final report

mod report;
mod sink;
pub mod stats;
mod traits;

pub use report::{print_report, CrawlReport};
pub use sink::{FileSink, MemorySink};
pub use stats::{CrawlerStats, StatsCollector, StatsHandle};
pub use traits::{OutputError, OutputResult, PageRecord, RecordSink, RECORD_SEPARATOR};
