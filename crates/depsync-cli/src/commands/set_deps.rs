//! Handler for `depsync set-deps`.

use std::collections::BTreeMap;
use std::path::Path;

use miette::Result;

use depsync_core::manifest::PackageManifest;
use depsync_util::errors::DepsyncError;

pub fn exec(manifest_path: &Path, deps_json: &str) -> Result<()> {
    let deps: BTreeMap<String, String> =
        serde_json::from_str(deps_json).map_err(|e| DepsyncError::Generic {
            message: format!("Invalid dependency map: {e}"),
        })?;

    let mut manifest = PackageManifest::from_path(manifest_path)?;
    manifest.dependencies = Some(deps);
    manifest.write_to(manifest_path)?;

    tracing::info!(path = %manifest_path.display(), "dependencies written");
    println!("Wrote dependencies to {}", manifest_path.display());
    Ok(())
}
