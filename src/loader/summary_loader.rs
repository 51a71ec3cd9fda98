use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::fs;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::loader::LoadError;
use crate::models::SpendSummary;

/// Reads an uploaded spend summary from disk and parses it.
#[derive(Debug, Clone, Default)]
pub struct SummaryLoader {
    read_timeout: Option<Duration>
}

impl SummaryLoader {
    pub fn new() -> Self {
        Self { read_timeout: None }
    }

    /// Bounds the file read. Parsing is not covered by the timeout.
    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = Some(read_timeout);
        self
    }

    /// Loads the first of `files`; any further files are ignored.
    ///
    /// # Errors
    /// - `LoadError::NoInput` if `files` is empty.
    /// - `LoadError::Read` if the file cannot be read as UTF-8 text in time.
    /// - `LoadError::Parse` if the text is not a valid summary document.
    pub async fn load(&self, files: &[PathBuf]) -> Result<SpendSummary, LoadError> {
        let Some((path, ignored)) = files.split_first() else {
            return Err(LoadError::NoInput)
        };

        if !ignored.is_empty() {
            warn!("Expected a single summary file, ignoring {} additional file(s)", ignored.len());
        }

        let text = self.read(path).await?;

        parse_summary(&text)
    }

    async fn read(&self, path: &Path) -> Result<String, LoadError> {
        debug!("Reading summary file: {}", path.display());

        let read = fs::read_to_string(path);

        let result = match self.read_timeout {
            Some(limit) => timeout(limit, read).await.unwrap_or_else(|_| {
                Err(io::Error::new(io::ErrorKind::TimedOut, format!("read did not complete within {limit:?}")))
            }),
            None => read.await
        };

        result.map_err(|error| LoadError::read(path, error))
    }
}

/// Parses summary text already held in memory.
pub fn parse_summary(text: &str) -> Result<SpendSummary, LoadError> {
    let summary: SpendSummary = serde_json::from_str(text)?;

    debug!("Parsed summary with {} transaction(s)", summary.transactions.len());

    Ok(summary)
}
