use std::path::PathBuf;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures that abort a patch run
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("Failed to emit status output: {0}")]
    Output(#[from] std::io::Error),
}

impl PatchError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::Read {
            path: path.into(),
            source: source.into(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::Write {
            path: path.into(),
            source: source.into(),
        }
    }

    /// The file the failure is attributed to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => Some(path),
            Self::Output(_) => None,
        }
    }
}
