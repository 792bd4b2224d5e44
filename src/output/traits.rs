//! Output sink trait and the record it persists
//!
//! This module defines the trait interface for durable sinks and the
//! per-page record appended to them.

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Separator written after every rendered record
///
/// Records are brace-delimited blocks; the separator keeps consecutive
/// blocks on separate lines so the file can be split on `}\n`.
pub const RECORD_SEPARATOR: &str = "\n";

/// One successfully parsed page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    /// Page title (empty if the page had none)
    pub title: String,

    /// URL the page was fetched from
    pub url: String,
}

impl PageRecord {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// Renders the record block followed by [`RECORD_SEPARATOR`]
    ///
    /// Whitespace runs in the title collapse to single spaces, so a record
    /// never contains a line break outside its own layout.
    ///
    /// ```
    /// use ripple_crawl::PageRecord;
    ///
    /// let record = PageRecord::new("Home", "https://example.test/");
    /// assert_eq!(record.render(), "{\n\ttitle: Home,\n\turl: https://example.test/\n}\n");
    /// ```
    pub fn render(&self) -> String {
        let title = self.title.split_whitespace().collect::<Vec<_>>().join(" ");
        format!(
            "{{\n\ttitle: {},\n\turl: {}\n}}{}",
            title, self.url, RECORD_SEPARATOR
        )
    }
}

/// Trait for durable record sinks
///
/// Implementations must be safe to call from concurrent extraction tasks;
/// each append is written as one unit.
pub trait RecordSink: Send + Sync {
    /// Appends one record
    fn append(&self, record: &PageRecord) -> OutputResult<()>;
}
