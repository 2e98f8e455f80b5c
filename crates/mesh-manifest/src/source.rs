//! Manifest sources and how their bytes are fetched

use std::path::Path;
use std::sync::OnceLock;

use serde_yaml::{Mapping, Value};
use url::Url;

use crate::error::{FetchError, LoadError};

/// A location a manifest document is read from: a local path or a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSource {
    id: String,
    is_remote: bool,
}

impl ManifestSource {
    /// Classify `id` as remote when it parses as a URL with both a scheme and
    /// a host; anything else is treated as a local path.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let is_remote = Url::parse(&id)
            .map(|url| !url.scheme().is_empty() && url.has_host())
            .unwrap_or(false);
        Self { id, is_remote }
    }

    /// The identifier as given.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_remote(&self) -> bool {
        self.is_remote
    }

    /// Fetch and parse this source into its top-level mapping.
    ///
    /// Documents are parsed as YAML, which also accepts JSON.
    pub fn load<F>(&self, fetcher: &F) -> Result<Mapping, LoadError>
    where
        F: SourceFetcher + ?Sized,
    {
        let bytes = fetcher.fetch(self)?;
        match serde_yaml::from_slice::<Value>(&bytes)? {
            Value::Mapping(mapping) => Ok(mapping),
            _ => Err(LoadError::NotAMapping),
        }
    }
}

impl std::fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}

/// Reads the raw bytes behind a [`ManifestSource`].
///
/// A fetch either returns the bytes or fails; retry and timeout policy belong
/// to the caller.
pub trait SourceFetcher {
    fn fetch(&self, source: &ManifestSource) -> Result<Vec<u8>, FetchError>;
}

/// Reads local paths from the filesystem and remote URLs over HTTP(S).
///
/// The HTTP client is only built the first time a remote source is fetched.
#[derive(Debug, Default)]
pub struct DefaultFetcher {
    client: OnceLock<reqwest::blocking::Client>,
}

impl DefaultFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (proxies, timeouts, custom roots).
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self {
            client: OnceLock::from(client),
        }
    }

    fn fetch_local(&self, path: &Path) -> Result<Vec<u8>, FetchError> {
        std::fs::read(path).map_err(|source| FetchError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn fetch_remote(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let http_err = |source| FetchError::Http {
            url: url.to_string(),
            source,
        };

        let client = self.client.get_or_init(reqwest::blocking::Client::new);
        let response = client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(http_err)?;
        let body = response.bytes().map_err(http_err)?;
        Ok(body.to_vec())
    }
}

impl SourceFetcher for DefaultFetcher {
    fn fetch(&self, source: &ManifestSource) -> Result<Vec<u8>, FetchError> {
        if source.is_remote() {
            tracing::debug!(url = source.id(), "Fetching remote manifest");
            self.fetch_remote(source.id())
        } else {
            tracing::debug!(path = source.id(), "Reading local manifest");
            self.fetch_local(Path::new(source.id()))
        }
    }
}
