//! URL handling module for Ripple-Crawl
//!
//! This module provides the crawl's domain root, anchor resolution and the
//! fingerprints the visited set is keyed on.

mod domain;
mod fingerprint;
mod normalize;

// Re-export main functions
pub use domain::DomainRoot;
pub use fingerprint::fingerprint;
pub use normalize::resolve_href;
