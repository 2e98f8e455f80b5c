//! Loading and merging manifests from multiple sources

use std::collections::BTreeMap;

use serde_yaml::Mapping;

use crate::entry::ManifestEntry;
use crate::error::{Error, LoadError, Result};
use crate::source::{DefaultFetcher, ManifestSource, SourceFetcher};

/// Merged view over an ordered list of manifest sources.
///
/// Built eagerly and read-only afterwards. When several sources define the
/// same entry, the last source wins and its entry replaces the earlier one
/// whole; fields are never combined across sources.
#[derive(Debug, Clone)]
pub struct Manifest {
    sources: Vec<ManifestSource>,
    entries: BTreeMap<String, ManifestEntry>,
}

impl Manifest {
    /// Load and merge `sources` with the [`DefaultFetcher`].
    pub fn load<I, S>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::load_with(sources, &DefaultFetcher::new())
    }

    /// Load and merge `sources` in order, reading each through `fetcher`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Load`] for the first source that cannot be fetched,
    /// is not a mapping of entry names to mappings, or has an entry without
    /// a `channel`. Nothing from earlier sources is returned in that case.
    pub fn load_with<I, S, F>(sources: I, fetcher: &F) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: SourceFetcher + ?Sized,
    {
        let sources: Vec<ManifestSource> = sources.into_iter().map(ManifestSource::new).collect();
        let mut entries = BTreeMap::new();

        for source in &sources {
            let loaded = source
                .load(fetcher)
                .and_then(|document| parse_entries(&document));

            let loaded = match loaded {
                Ok(loaded) => loaded,
                Err(cause) => {
                    tracing::error!(source = source.id(), error = %cause, "Error loading manifest");
                    return Err(Error::load(source.id(), cause));
                }
            };

            tracing::debug!(
                source = source.id(),
                entries = loaded.len(),
                "Loaded manifest source"
            );
            for (name, entry) in loaded {
                if entries.insert(name.clone(), entry).is_some() {
                    tracing::debug!(entry = %name, source = source.id(), "Entry overridden");
                }
            }
        }

        Ok(Self { sources, entries })
    }

    /// Look up the entry named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no source defines `name`.
    pub fn get_entry(&self, name: &str) -> Result<&ManifestEntry> {
        self.entries.get(name).ok_or_else(|| Error::NotFound {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All merged entries, ordered by name.
    pub fn entries(&self) -> &BTreeMap<String, ManifestEntry> {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Sources in the order they were applied.
    pub fn sources(&self) -> &[ManifestSource] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validate every entry of one source document, in document order.
fn parse_entries(document: &Mapping) -> std::result::Result<Vec<(String, ManifestEntry)>, LoadError> {
    document
        .iter()
        .map(|(key, value)| -> std::result::Result<_, LoadError> {
            let name = key.as_str().ok_or_else(|| LoadError::NonStringKey {
                key: format!("{key:?}"),
            })?;
            Ok((name.to_string(), ManifestEntry::from_value(name, value)?))
        })
        .collect()
}
