use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of dictionary loading and configuration. Segmentation itself never fails.
#[derive(Debug, Error)]
pub enum WordsegError {
    #[error("cannot read dictionary `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed dictionary `{path}` at line {line}: {reason}")]
    Format {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, WordsegError>;
