//! HTTP fetcher implementation
//!
//! This module handles all page requests for the crawler:
//! - Building the HTTP client (user agent, timeout, redirect cap)
//! - GET requests with bounded retries and linear backoff
//! - Parsing the first 200 response into a [`Document`]
//! - Running a fetch on its own task with a private one-shot result slot

use crate::config::{Config, FetchConfig};
use crate::crawler::parser::{parse_document, Document};
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;
use tokio::sync::oneshot;

/// Result of a fetch operation
///
/// Only `Success` carries a document. The other variants are definitive
/// failures: the caller skips the URL and moves on.
#[derive(Debug)]
pub enum FetchResult {
    /// A 200 response was received and parsed
    Success(Document),

    /// Every attempt failed with a transport error or a non-200 status
    Exhausted {
        /// Attempts made before giving up
        attempts: u32,
    },

    /// A 200 response arrived but its body could not be decoded
    Malformed {
        /// Error description
        reason: String,
    },
}

impl FetchResult {
    /// Returns the document, or `None` for either failure kind
    pub fn into_document(self) -> Option<Document> {
        match self {
            Self::Success(document) => Some(document),
            Self::Exhausted { .. } | Self::Malformed { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Retry schedule for page fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, first try included
    pub max_attempts: u32,

    /// Attempt `i` (0-indexed) is preceded by `i * backoff_step`
    pub backoff_step: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &FetchConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            backoff_step: Duration::from_millis(config.backoff_step_ms),
        }
    }

    /// Delay before the given 0-indexed attempt
    ///
    /// Grows linearly: with the default 2s step the waits are 0s, 2s, 4s, 6s, 8s.
    pub fn delay_before(&self, attempt: u32) -> Duration {
        self.backoff_step * attempt
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&FetchConfig::default())
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use ripple_crawl::config::Config;
/// use ripple_crawl::crawler::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.header_value())
        .timeout(Duration::from_secs(config.fetch.timeout_secs))
        .redirect(Policy::limited(config.fetch.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches pages with bounded retries
///
/// Cloning is cheap: the underlying client is reference counted.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    policy: RetryPolicy,
}

impl Fetcher {
    pub fn new(client: Client, policy: RetryPolicy) -> Self {
        Self { client, policy }
    }

    /// Builds the client and retry policy from configuration
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self::new(
            build_http_client(config)?,
            RetryPolicy::from_config(&config.fetch),
        ))
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Fetches a URL, retrying on any transport error or non-200 status
    ///
    /// # Retry Logic
    ///
    /// | Condition | Action |
    /// |-----------|--------|
    /// | HTTP 200 | Parse body, return `Success` without further attempts |
    /// | Other status | Release response, retry after backoff |
    /// | Timeout / connection error / redirect cap | Retry after backoff |
    /// | Body decode error after 200 | Return `Malformed` |
    /// | Attempts exhausted | Return `Exhausted` |
    ///
    /// Never returns an error: every outcome is a [`FetchResult`].
    pub async fn fetch(&self, url: &str) -> FetchResult {
        let max_attempts = self.policy.max_attempts;

        for attempt in 0..max_attempts {
            let delay = self.policy.delay_before(attempt);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let response = match self.client.get(url).send().await {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!(
                        "Attempt {}/{} for {} failed: {}",
                        attempt + 1,
                        max_attempts,
                        url,
                        e
                    );
                    continue;
                }
            };

            let status = response.status();
            if status != StatusCode::OK {
                tracing::warn!(
                    "Attempt {}/{} for {} returned {}",
                    attempt + 1,
                    max_attempts,
                    url,
                    status
                );
                drop(response);
                continue;
            }

            return match response.text().await {
                Ok(body) => FetchResult::Success(parse_document(&body)),
                Err(e) => {
                    tracing::warn!("Failed to read body of {}: {}", url, e);
                    FetchResult::Malformed {
                        reason: e.to_string(),
                    }
                }
            };
        }

        tracing::debug!("Giving up on {} after {} attempts", url, max_attempts);
        FetchResult::Exhausted {
            attempts: max_attempts,
        }
    }

    /// Runs [`Fetcher::fetch`] on its own task
    ///
    /// Each call gets a fresh one-shot channel, so results can never be
    /// delivered to the wrong caller. If the task dies before sending, the
    /// receiver resolves to an error, which callers treat as a failed fetch.
    pub fn spawn_fetch(&self, url: String) -> oneshot::Receiver<FetchResult> {
        let (tx, rx) = oneshot::channel();
        let fetcher = self.clone();

        tokio::spawn(async move {
            let result = fetcher.fetch(&url).await;
            if tx.send(result).is_err() {
                tracing::debug!("Fetch result for {} dropped: receiver gone", url);
            }
        });

        rx
    }
}
