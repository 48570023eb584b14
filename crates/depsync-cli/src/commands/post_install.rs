//! Handler for `depsync post-install`.

use std::path::Path;

use miette::Result;

use depsync_core::manifest::PackageManifest;
use depsync_core::merge::merge_dependencies;
use depsync_util::errors::DepsyncError;
use depsync_util::process;

pub fn exec(
    source: &Path,
    dir: Option<&Path>,
    skip_install: bool,
    install_cli: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let project_dir = match dir {
        Some(d) => d.to_path_buf(),
        None => std::env::current_dir().map_err(DepsyncError::Io)?,
    };
    let target_path = project_dir.join("package.json");

    if !target_path.is_file() {
        return Err(DepsyncError::Manifest {
            message: format!("No package.json found in {}", project_dir.display()),
        }
        .into());
    }

    let source_manifest = PackageManifest::from_path(source)?;
    let mut target_manifest = PackageManifest::from_path(&target_path)?;

    let report = merge_dependencies(&source_manifest, &mut target_manifest)?;

    if report.is_empty() {
        println!("Dependencies already in sync");
        return Ok(());
    }

    target_manifest.write_to(&target_path)?;

    if verbose {
        for name in &report.added {
            println!("  added {name}");
        }
        for name in &report.updated {
            println!("  upgraded {name}");
        }
    }
    println!(
        "Merged {} dependency change(s) into {}",
        report.len(),
        target_path.display()
    );

    if skip_install {
        return Ok(());
    }

    process::npm_install(&project_dir)?;
    if let Some(package) = install_cli {
        process::npm_install_global(package)?;
    }

    Ok(())
}
