//! Manifest commands

use mesh_manifest::Manifest;
use serde::Serialize;

use crate::error::{CliError, Result};

/// Load the manifest layered from `sources`, refusing an empty source list.
fn load(sources: &[String]) -> Result<Manifest> {
    if sources.is_empty() {
        return Err(CliError::user(
            "No dependency manifests specified. Use --dependency-manifest to specify one or more manifest sources.",
        ));
    }
    Ok(Manifest::load(sources)?)
}

/// Render `value` as pretty JSON, or as YAML by default.
fn render<T: Serialize + ?Sized>(value: &T, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(value)? + "\n")
    } else {
        Ok(serde_yaml::to_string(value)?)
    }
}

/// Run the manifest show command
///
/// The YAML form is itself a valid manifest document, so it can be fed back
/// in as a `--dependency-manifest` source.
pub fn run_manifest_show(sources: &[String], json: bool) -> Result<()> {
    let manifest = load(sources)?;
    tracing::debug!(
        sources = manifest.sources().len(),
        entries = manifest.len(),
        "Merged manifest"
    );
    print!("{}", render(manifest.entries(), json)?);
    Ok(())
}

/// Run the manifest get command
pub fn run_manifest_get(sources: &[String], name: &str, json: bool) -> Result<()> {
    let manifest = load(sources)?;
    let entry = manifest.get_entry(name)?;
    print!("{}", render(entry, json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_manifest::ManifestEntry;
    use mesh_test_utils::manifest::{BASE_MANIFEST, ManifestDir};

    #[test]
    fn test_no_sources_is_a_user_error() {
        let err = run_manifest_show(&[], false).unwrap_err();
        assert!(matches!(err, CliError::User { .. }));
        assert!(err.to_string().contains("--dependency-manifest"));
    }

    #[test]
    fn test_show_runs() {
        let dir = ManifestDir::new();
        let path = dir.write("manifest.yaml", BASE_MANIFEST);
        assert!(run_manifest_show(&[path], false).is_ok());
    }

    #[test]
    fn test_render_yaml_round_trips_as_manifest() {
        let dir = ManifestDir::new();
        let path = dir.write("manifest.yaml", BASE_MANIFEST);
        let manifest = Manifest::load([&path]).unwrap();

        let yaml = render(manifest.entries(), false).unwrap();
        let reloaded = Manifest::load([dir.write("rendered.yaml", &yaml)]).unwrap();

        assert_eq!(reloaded.entries(), manifest.entries());
    }

    #[test]
    fn test_render_entry_formats() {
        let entry = ManifestEntry::new("latest/edge", "charm-a").with_revision(3);

        assert_eq!(
            render(&entry, false).unwrap(),
            "channel: latest/edge\nentity_url: charm-a\nrevision: 3\n"
        );
        assert!(render(&entry, true).unwrap().contains("\"revision\": 3"));
    }

    #[test]
    fn test_get_missing_entry_fails() {
        let dir = ManifestDir::new();
        let path = dir.write("manifest.yaml", BASE_MANIFEST);

        let err = run_manifest_get(&[path], "nonexistent", false).unwrap_err();
        assert!(matches!(
            err,
            CliError::Manifest(mesh_manifest::Error::NotFound { .. })
        ));
    }
}
