//! A single deployable application's configuration

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::error::LoadError;

/// Deployment settings for one entry of a manifest.
///
/// Field names match the arguments a deploy call takes, so an entry can be
/// rendered straight into deploy parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    /// Channel to deploy from (e.g. `latest/edge`).
    pub channel: String,
    /// What to deploy. Defaults to the entry name.
    pub entity_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust: Option<bool>,
    /// Resource name to resource location (e.g. an OCI image).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<BTreeMap<String, String>>,
}

/// The document form of an entry, before defaults are applied.
#[derive(Debug, Deserialize)]
struct RawEntry {
    channel: String,
    #[serde(default, alias = "entityRef")]
    entity_url: Option<String>,
    #[serde(default)]
    revision: Option<i64>,
    #[serde(default)]
    trust: Option<bool>,
    #[serde(default)]
    resources: Option<BTreeMap<String, String>>,
}

impl ManifestEntry {
    /// An entry with only the required fields set.
    pub fn new(channel: impl Into<String>, entity_url: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            entity_url: entity_url.into(),
            revision: None,
            trust: None,
            resources: None,
        }
    }

    pub fn with_revision(mut self, revision: i64) -> Self {
        self.revision = Some(revision);
        self
    }

    pub fn with_trust(mut self, trust: bool) -> Self {
        self.trust = Some(trust);
        self
    }

    pub fn with_resource(mut self, name: impl Into<String>, location: impl Into<String>) -> Self {
        self.resources
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), location.into());
        self
    }

    /// Build the entry named `name` from its configuration value.
    ///
    /// The value must be a mapping containing `channel`. Optional fields that
    /// are absent stay unset; `entity_url` falls back to `name`. Keys this
    /// type does not know are ignored.
    pub fn from_value(name: &str, value: &Value) -> Result<Self, LoadError> {
        let Value::Mapping(config) = value else {
            return Err(LoadError::EntryNotAMapping {
                entry: name.to_string(),
            });
        };
        if !config.contains_key("channel") {
            return Err(LoadError::MissingChannel {
                entry: name.to_string(),
            });
        }

        let raw: RawEntry =
            serde_yaml::from_value(value.clone()).map_err(|source| LoadError::InvalidEntry {
                entry: name.to_string(),
                source,
            })?;

        Ok(Self {
            channel: raw.channel,
            entity_url: raw.entity_url.unwrap_or_else(|| name.to_string()),
            revision: raw.revision,
            trust: raw.trust,
            resources: raw.resources,
        })
    }
}
