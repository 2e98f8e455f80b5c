//! Tests for manifests served over HTTP

use mesh_manifest::{DefaultFetcher, Error, FetchError, LoadError, Manifest, ManifestSource};
use mesh_test_utils::http::{serve_once, unreachable_url};
use mesh_test_utils::manifest::{BASE_MANIFEST, ManifestDir, OVERRIDE_MANIFEST};
use std::time::Duration;

#[test]
fn test_load_from_url() {
    let url = serve_once(200, r#"{"charm-a": {"channel": "latest/edge", "trust": true}}"#);

    let source = ManifestSource::new(&url);
    assert!(source.is_remote());

    let document = source.load(&DefaultFetcher::new()).unwrap();
    assert_eq!(document["charm-a"]["channel"].as_str(), Some("latest/edge"));
}

#[test]
fn test_remote_source_overrides_local() {
    let dir = ManifestDir::new();
    let base = dir.write("base.yaml", BASE_MANIFEST);
    let url = serve_once(200, OVERRIDE_MANIFEST);

    let manifest = Manifest::load([base, url]).unwrap();

    assert_eq!(manifest.get_entry("charm-a").unwrap().channel, "2.0/edge");
    assert_eq!(manifest.get_entry("charm-b").unwrap().channel, "1.0/stable");
    assert!(manifest.contains("charm-c"));
}

#[test]
fn test_valid_url_invalid_content() {
    let url = serve_once(200, "invalid yaml content");

    let err = Manifest::load([url]).unwrap_err();
    assert!(matches!(
        err,
        Error::Load { cause: LoadError::NotAMapping, .. }
    ));
}

#[test]
fn test_error_status_is_unreachable() {
    let url = serve_once(404, "");

    let err = Manifest::load([url.clone()]).unwrap_err();
    match err {
        Error::Load { source_id, cause } => {
            assert_eq!(source_id, url);
            assert!(matches!(
                cause,
                LoadError::Unreachable(FetchError::Http { .. })
            ));
        }
        other => panic!("expected load error, got {other:?}"),
    }
}

#[test]
fn test_connection_refused_is_unreachable() {
    let err = Manifest::load([unreachable_url()]).unwrap_err();
    assert!(matches!(
        err,
        Error::Load { cause: LoadError::Unreachable(FetchError::Http { .. }), .. }
    ));
}

#[test]
fn test_custom_client_fetches_remote_source() {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    let fetcher = DefaultFetcher::with_client(client);
    let url = serve_once(200, OVERRIDE_MANIFEST);

    let manifest = Manifest::load_with([url], &fetcher).unwrap();

    assert_eq!(manifest.get_entry("charm-a").unwrap().revision, Some(100));
    assert_eq!(manifest.len(), 2);
}

#[test]
fn test_custom_client_still_reads_local_sources() {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    let fetcher = DefaultFetcher::with_client(client);
    let dir = ManifestDir::new();
    let base = dir.write("base.yaml", BASE_MANIFEST);

    let manifest = Manifest::load_with([base], &fetcher).unwrap();
    assert!(manifest.contains("charm-b"));
}
