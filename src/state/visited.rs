//! Set of URL fingerprints that have been handed to the fetcher.

use crate::url::fingerprint;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Thread-safe membership tracker over URL fingerprints
///
/// Entries are never removed. `add` is idempotent: adding the same URL twice
/// leaves `size()` unchanged, so the visited count is the number of distinct
/// fingerprints. Two URLs whose fingerprints collide count as one.
#[derive(Debug, Default)]
pub struct VisitedSet {
    fingerprints: Mutex<HashSet<u64>>,
}

impl VisitedSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<u64>> {
        self.fingerprints.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Marks a URL as visited
    ///
    /// Returns `true` if the URL was not visited before.
    pub fn add(&self, url: &str) -> bool {
        self.lock().insert(fingerprint(url))
    }

    /// Returns true if the URL (or a colliding one) has been visited
    pub fn contains(&self, url: &str) -> bool {
        self.lock().contains(&fingerprint(url))
    }

    /// Number of distinct URLs visited
    pub fn size(&self) -> usize {
        self.lock().len()
    }
}
