//! State module for tracking crawl progress
//!
//! This module provides the two shared structures the crawl loop and the link
//! extractor work against.
//!
//! # Components
//!
//! - `Frontier`: FIFO of URLs waiting to be fetched, with a running total of enqueues
//! - `VisitedSet`: fingerprints of every URL already handed to the fetcher

mod frontier;
mod visited;

// Re-export main types
pub use frontier::Frontier;
pub use visited::VisitedSet;
