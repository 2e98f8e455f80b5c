//! [`ManifestDir`] for writing manifest documents to disk.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Two entries: `charm-a` (channel and trust only) and `charm-b` (every field).
pub const BASE_MANIFEST: &str = r#"charm-a:
  channel: latest/edge
  trust: true
charm-b:
  channel: 1.0/stable
  revision: 42
  entity_url: custom/url
  resources:
    some-image-name: some-image-url
"#;

/// Overrides `charm-a` (new channel and revision, trust restated) and adds
/// `charm-c`.
pub const OVERRIDE_MANIFEST: &str = r#"charm-a:
  channel: 2.0/edge
  revision: 100
  trust: true
charm-c:
  channel: latest/stable
"#;

/// A temporary directory holding manifest files.
///
/// # Example
///
/// ```rust,no_run
/// use mesh_test_utils::manifest::{BASE_MANIFEST, ManifestDir};
///
/// let dir = ManifestDir::new();
/// let path = dir.write("manifest.yaml", BASE_MANIFEST);
/// assert!(std::path::Path::new(&path).is_file());
/// ```
pub struct ManifestDir {
    temp_dir: TempDir,
}

impl Default for ManifestDir {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestDir {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Full path of `name` inside the directory, whether or not it exists.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write `content` to `name` and return the path as a source identifier.
    pub fn write(&self, name: &str, content: &str) -> String {
        let path = self.path(name);
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("ManifestDir::write: {}: {e}", path.display()));
        path.to_string_lossy().into_owned()
    }
}
