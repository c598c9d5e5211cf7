//! Error types for hzcfg-fs

use std::path::PathBuf;

/// Result type for hzcfg-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while finding, reading or writing resources
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing a file failed
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A settings file exists but does not deserialize
    #[error("Failed to parse {format} settings at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported settings format: {extension}")]
    UnsupportedFormat { extension: String },

    /// An embedded location was opened against a classpath that does not
    /// carry it
    #[error("Embedded classpath resource '{name}' is not registered")]
    EmbeddedResourceMissing { name: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error means the resource is absent rather than unreadable.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            Self::EmbeddedResourceMissing { .. } => true,
            _ => false,
        }
    }
}
