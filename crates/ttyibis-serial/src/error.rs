use std::path::PathBuf;

/// Errors that can occur while opening or configuring a serial line.
#[derive(Debug, thiserror::Error)]
pub enum SerialError {
    /// Failed to open the device node.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read the current line settings.
    #[error("failed to read line settings of {path}: {source}")]
    GetAttributes {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to apply the new line settings.
    #[error("failed to apply line settings to {path}: {source}")]
    SetAttributes {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to discard stale buffered bytes.
    #[error("failed to flush {path}: {source}")]
    Flush {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed while waiting for the output queue to drain.
    #[error("failed to drain {path}: {source}")]
    Drain {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SerialError {
    /// The OS error underlying this failure.
    pub fn io_source(&self) -> &std::io::Error {
        match self {
            SerialError::Open { source, .. }
            | SerialError::GetAttributes { source, .. }
            | SerialError::SetAttributes { source, .. }
            | SerialError::Flush { source, .. }
            | SerialError::Drain { source, .. } => source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SerialError>;
