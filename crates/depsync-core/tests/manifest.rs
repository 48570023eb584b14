use depsync_core::manifest::PackageManifest;
use depsync_util::errors::DepsyncError;

const SAMPLE: &str = r#"{
  "name": "consumer",
  "version": "0.4.2",
  "description": "a consuming project",
  "scripts": { "test": "mocha" },
  "dependencies": {
    "left-pad": "^1.3.0",
    "lodash": "~4.17.21"
  }
}"#;

#[test]
fn parse_sample_manifest() {
    let manifest = PackageManifest::from_str(SAMPLE).unwrap();
    assert_eq!(manifest.name.as_deref(), Some("consumer"));
    assert_eq!(manifest.version.as_deref(), Some("0.4.2"));

    let deps = manifest.dependencies.unwrap();
    assert_eq!(deps.get("left-pad").unwrap(), "^1.3.0");
    assert_eq!(deps.get("lodash").unwrap(), "~4.17.21");
}

#[test]
fn unknown_keys_are_preserved() {
    let manifest = PackageManifest::from_str(SAMPLE).unwrap();
    assert!(manifest.extra.contains_key("description"));
    assert!(manifest.extra.contains_key("scripts"));
}

#[test]
fn missing_dependencies_key_is_none() {
    let manifest = PackageManifest::from_str(r#"{"name": "bare"}"#).unwrap();
    assert!(manifest.dependencies.is_none());
}

#[test]
fn invalid_json_is_a_manifest_error() {
    let err = PackageManifest::from_str("{not json").unwrap_err();
    assert!(matches!(err, DepsyncError::Manifest { .. }), "got: {err}");
}

#[test]
fn write_read_cycle_keeps_everything() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("package.json");

    let manifest = PackageManifest::from_str(SAMPLE).unwrap();
    manifest.write_to(&path).unwrap();

    let reread = PackageManifest::from_path(&path).unwrap();
    assert_eq!(reread.name.as_deref(), Some("consumer"));
    assert_eq!(reread.dependencies.unwrap().len(), 2);
    assert!(reread.extra.contains_key("scripts"));
}

#[test]
fn written_manifest_is_pretty_printed() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("package.json");

    let manifest = PackageManifest::from_str(SAMPLE).unwrap();
    manifest.write_to(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\n  \"name\""), "got: {content}");
}

#[test]
fn missing_file_is_a_manifest_error() {
    let err = PackageManifest::from_path(std::path::Path::new("/nonexistent/package.json"))
        .unwrap_err();
    assert!(matches!(err, DepsyncError::Manifest { .. }), "got: {err}");
}
