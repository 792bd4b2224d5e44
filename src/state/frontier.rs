//! FIFO queue of URLs waiting to be fetched.

use crate::FrontierError;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct FrontierInner {
    elements: VecDeque<String>,
    total_enqueued: usize,
}

/// Thread-safe FIFO of pending URLs
///
/// Every operation takes the same lock, so concurrent producers cannot corrupt
/// the queue. `size()` followed by `dequeue()` is two lock acquisitions and is
/// only safe with a single consumer; use [`Frontier::try_dequeue`] when more
/// than one task takes from the queue.
///
/// No uniqueness check happens here: callers filter duplicates before
/// enqueueing.
#[derive(Debug, Default)]
pub struct Frontier {
    inner: Mutex<FrontierInner>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FrontierInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a URL to the tail
    pub fn enqueue(&self, url: impl Into<String>) {
        let mut inner = self.lock();
        inner.elements.push_back(url.into());
        inner.total_enqueued += 1;
    }

    /// Removes and returns the head
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::Empty`] when nothing is queued.
    pub fn dequeue(&self) -> Result<String, FrontierError> {
        self.try_dequeue().ok_or(FrontierError::Empty)
    }

    /// Removes and returns the head, or `None` when the queue is empty
    ///
    /// The emptiness check and the removal happen under one lock.
    pub fn try_dequeue(&self) -> Option<String> {
        self.lock().elements.pop_front()
    }

    /// Number of URLs currently pending
    pub fn size(&self) -> usize {
        self.lock().elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Number of successful `enqueue` calls ever made
    pub fn total_enqueued(&self) -> usize {
        self.lock().total_enqueued
    }

    /// Copy of the pending URLs, head first
    pub fn snapshot(&self) -> Vec<String> {
        self.lock().elements.iter().cloned().collect()
    }
}
