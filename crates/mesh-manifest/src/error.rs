//! Error types for mesh-manifest

use std::path::PathBuf;

/// Result type for manifest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by [`Manifest`](crate::Manifest).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A source could not be fetched, parsed or validated. Loading stops at
    /// the first such source.
    #[error("failed to load manifest from {source_id}: {cause}")]
    Load {
        source_id: String,
        #[source]
        cause: LoadError,
    },

    /// No loaded source defines the requested entry.
    #[error("entry {name} not found in manifest")]
    NotFound { name: String },
}

impl Error {
    pub fn load(source_id: impl Into<String>, cause: LoadError) -> Self {
        Self::Load {
            source_id: source_id.into(),
            cause,
        }
    }
}

/// Why a single manifest source was rejected.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Unreachable(#[from] FetchError),

    #[error("invalid manifest document: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("manifest must be a mapping of entry names to configurations")]
    NotAMapping,

    #[error("entry names must be strings, found {key}")]
    NonStringKey { key: String },

    #[error("configuration for {entry} must be a mapping")]
    EntryNotAMapping { entry: String },

    #[error("missing required 'channel' field for {entry}")]
    MissingChannel { entry: String },

    #[error("invalid configuration for {entry}: {source}")]
    InvalidEntry {
        entry: String,
        source: serde_yaml::Error,
    },
}

/// A source could not be read.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
