//! Record sink implementations

use crate::output::traits::{OutputError, OutputResult, PageRecord, RecordSink};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Appends records to a single file for the lifetime of the crawl
///
/// The file is created if missing and never truncated. One lock guards the
/// handle so concurrent appends do not interleave.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Opens `path` for appending
    pub fn open(path: impl AsRef<Path>) -> OutputResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| OutputError::Open {
                path: path.display().to_string(),
                source,
            })?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for FileSink {
    fn append(&self, record: &PageRecord) -> OutputResult<()> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.write_all(record.render().as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

/// Keeps records in memory, in append order
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<PageRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every record appended so far
    pub fn records(&self) -> Vec<PageRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl RecordSink for MemorySink {
    fn append(&self, record: &PageRecord) -> OutputResult<()> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }
}
