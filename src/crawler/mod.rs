//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with retry logic
//! - HTML parsing into queryable documents
//! - Link discovery and filtering
//! - Overall crawl coordination

mod context;
mod coordinator;
mod extractor;
mod fetcher;
mod parser;

pub use context::CrawlContext;
pub use coordinator::{crawl, Coordinator, CrawlPhase};
pub use extractor::LinkExtractor;
pub use fetcher::{build_http_client, FetchResult, Fetcher, RetryPolicy};
pub use parser::{parse_document, Document};
