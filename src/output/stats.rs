//! Periodic sampling of frontier and visited-set sizes
//!
//! The collector only reads the shared structures; it never influences the
//! crawl.

use crate::state::{Frontier, VisitedSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Time series recorded during a crawl
///
/// Both series start at `(0, 0)` and gain one point per sampling tick.
#[derive(Debug, Clone, PartialEq)]
pub struct CrawlerStats {
    /// (elapsed minutes, visited count)
    pub visited_series: Vec<(f64, usize)>,

    /// (elapsed minutes, visited / frontier)
    pub ratio_series: Vec<(f64, f64)>,
}

impl Default for CrawlerStats {
    fn default() -> Self {
        Self {
            visited_series: vec![(0.0, 0)],
            ratio_series: vec![(0.0, 0.0)],
        }
    }
}

impl CrawlerStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one sample to both series
    ///
    /// An empty frontier yields an infinite ratio once anything is visited.
    pub fn record(&mut self, elapsed: Duration, visited: usize, frontier: usize) {
        let minutes = elapsed.as_secs_f64() / 60.0;
        let ratio = match (visited, frontier) {
            (0, 0) => 0.0,
            (_, 0) => f64::INFINITY,
            (v, f) => v as f64 / f as f64,
        };

        self.visited_series.push((minutes, visited));
        self.ratio_series.push((minutes, ratio));
    }

    /// Number of samples, the initial `(0, 0)` point included
    pub fn len(&self) -> usize {
        self.visited_series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited_series.is_empty()
    }
}

/// Handle to a running collector
pub struct StatsHandle {
    stop: oneshot::Sender<()>,
    task: JoinHandle<CrawlerStats>,
}

impl StatsHandle {
    /// Stops sampling and returns the collected series
    pub async fn stop(self) -> CrawlerStats {
        // The task also stops if the sender is dropped, so a send error is harmless
        let _ = self.stop.send(());
        match self.task.await {
            Ok(stats) => stats,
            Err(e) => {
                tracing::error!("Stats collector task failed: {}", e);
                CrawlerStats::new()
            }
        }
    }
}

/// Samples crawl progress on a fixed interval
pub struct StatsCollector;

impl StatsCollector {
    /// Starts sampling on a background task
    ///
    /// # Arguments
    ///
    /// * `frontier` - Frontier to sample
    /// * `visited` - Visited set to sample
    /// * `period` - Time between samples; the first sample is taken one period in
    pub fn spawn(frontier: Arc<Frontier>, visited: Arc<VisitedSet>, period: Duration) -> StatsHandle {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            // interval_at panics on a zero period
            let period = period.max(Duration::from_millis(1));
            let start = Instant::now();
            let mut stats = CrawlerStats::new();
            let mut ticker = interval_at(start + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {
                        stats.record(start.elapsed(), visited.size(), frontier.size());
                    }
                }
            }

            tracing::debug!("Stats collector stopped after {} samples", stats.len());
            stats
        });

        StatsHandle {
            stop: stop_tx,
            task,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_origin_point() {
        let stats = CrawlerStats::new();
        assert_eq!(stats.visited_series, vec![(0.0, 0)]);
        assert_eq!(stats.ratio_series, vec![(0.0, 0.0)]);
    }

    #[test]
    fn test_record_ratio() {
        let mut stats = CrawlerStats::new();
        stats.record(Duration::from_secs(30), 10, 40);
        stats.record(Duration::from_secs(60), 20, 0);
        stats.record(Duration::from_secs(90), 0, 0);

        assert_eq!(stats.visited_series[1], (0.5, 10));
        assert_eq!(stats.ratio_series[1], (0.5, 0.25));
        assert_eq!(stats.ratio_series[2], (1.0, f64::INFINITY));
        assert_eq!(stats.ratio_series[3], (1.5, 0.0));
        assert_eq!(stats.len(), 4);
    }

    #[tokio::test]
    async fn test_collector_samples_until_stopped() {
        let frontier = Arc::new(Frontier::new());
        let visited = Arc::new(VisitedSet::new());
        frontier.enqueue("https://example.test/a");
        visited.add("https://example.test/");

        let handle = StatsCollector::spawn(
            Arc::clone(&frontier),
            Arc::clone(&visited),
            Duration::from_millis(10),
        );
        tokio::time::sleep(Duration::from_millis(100)).await;
        let stats = handle.stop().await;

        assert!(stats.len() > 2, "only {} samples", stats.len());
        assert!(stats.visited_series[1..].iter().all(|&(_, v)| v == 1));
        assert!(stats.ratio_series[1..].iter().all(|&(_, r)| r == 1.0));
    }

    #[tokio::test]
    async fn test_zero_period_does_not_panic() {
        let handle = StatsCollector::spawn(
            Arc::new(Frontier::new()),
            Arc::new(VisitedSet::new()),
            Duration::ZERO,
        );
        tokio::time::sleep(Duration::from_millis(20)).await;
        let stats = handle.stop().await;
        assert!(stats.len() > 1);
    }

    #[tokio::test]
    async fn test_stop_before_first_tick() {
        let handle = StatsCollector::spawn(
            Arc::new(Frontier::new()),
            Arc::new(VisitedSet::new()),
            Duration::from_secs(60),
        );
        let stats = handle.stop().await;
        assert_eq!(stats, CrawlerStats::new());
    }
}
