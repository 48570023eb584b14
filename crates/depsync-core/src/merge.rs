//! Greater-wins merge of dependency declarations between two manifests.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use depsync_util::errors::DepsyncError;

use crate::manifest::PackageManifest;
use crate::version::{compare, strip_range_qualifier};

/// Names of the dependencies a merge added to or overwrote in the target.
#[derive(Debug, Default)]
pub struct MergeReport {
    pub added: Vec<String>,
    pub updated: Vec<String>,
}

impl MergeReport {
    /// True when the merge left the target untouched.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty()
    }

    /// Total number of changed entries.
    pub fn len(&self) -> usize {
        self.added.len() + self.updated.len()
    }
}

/// Merge `source`'s dependencies into `target`, keeping the greater version
/// specifier per package.
///
/// Range qualifiers (`^`/`~`) are ignored for the comparison but preserved
/// in whichever specifier wins. Fails with a configuration error when
/// `source` declares no dependencies, and with a format error when any
/// involved specifier is not valid semver; either failure leaves `target`
/// in its pre-merge state for the entries not yet visited.
pub fn merge_dependencies(
    source: &PackageManifest,
    target: &mut PackageManifest,
) -> Result<MergeReport, DepsyncError> {
    let source_deps = match source.dependencies {
        Some(ref deps) if !deps.is_empty() => deps,
        _ => {
            return Err(DepsyncError::Configuration {
                message: "source package declares no dependencies".to_string(),
            })
        }
    };

    let target_deps = target.dependencies.get_or_insert_with(BTreeMap::new);
    let mut report = MergeReport::default();

    for (name, spec) in source_deps {
        match target_deps.get(name) {
            None => {
                tracing::debug!(%name, %spec, "adding dependency");
                target_deps.insert(name.clone(), spec.clone());
                report.added.push(name.clone());
            }
            Some(existing) => {
                let ord = compare(strip_range_qualifier(spec), strip_range_qualifier(existing))?;
                if ord == Ordering::Greater {
                    tracing::debug!(%name, from = %existing, to = %spec, "upgrading dependency");
                    target_deps.insert(name.clone(), spec.clone());
                    report.updated.push(name.clone());
                }
            }
        }
    }

    Ok(report)
}
