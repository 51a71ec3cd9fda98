use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("No summary file was provided")]
    NoInput,
    #[error("Error reading uploaded file [{}]: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error
    },
    #[error("Error parsing uploaded file: {0}")]
    Parse(#[from] serde_json::Error)
}

impl LoadError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source
        }
    }
}
