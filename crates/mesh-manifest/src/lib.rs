//! Dependency manifests for deployment tests
//!
//! A manifest maps entry names (one per deployable application) to the channel,
//! entity reference, revision, trust flag and resources to deploy it with.
//! Manifests are loaded from an ordered list of sources, each a local path or
//! an HTTP(S) URL; a later source's entry replaces any earlier entry of the same
//! name.
//!
//! ```no_run
//! use mesh_manifest::Manifest;
//!
//! let manifest = Manifest::load(["manifest.yaml", "https://example.com/overrides.yaml"])?;
//! let entry = manifest.get_entry("grafana-k8s")?;
//! println!("{} from {}", entry.entity_url, entry.channel);
//! # Ok::<(), mesh_manifest::Error>(())
//! ```

pub mod entry;
pub mod error;
pub mod manifest;
pub mod source;

pub use entry::ManifestEntry;
pub use error::{Error, FetchError, LoadError, Result};
pub use manifest::Manifest;
pub use source::{DefaultFetcher, ManifestSource, SourceFetcher};
