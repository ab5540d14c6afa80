use anyhow::{Context, Result};
use std::path::Path;

use crate::runtime::Runtime;

/// Marker file that makes a directory an importable package.
pub const PACKAGE_MARKER: &str = "__init__.py";

/// Exclude filter applied to discovered package names.
///
/// Patterns use glob syntax and match the full dotted name, so `tests`
/// withholds only the top-level `tests` package while `tests.*` withholds
/// every subpackage underneath it.
#[derive(Debug, Default)]
pub struct PackageFilter {
    exclude: Vec<glob::Pattern>,
}

impl PackageFilter {
    pub fn new(exclude: &[String]) -> Result<Self> {
        let exclude = exclude
            .iter()
            .map(|raw| {
                glob::Pattern::new(raw)
                    .with_context(|| format!("Invalid exclude pattern {:?}", raw))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(PackageFilter { exclude })
    }

    /// Whether a dotted package name survives the filter.
    pub fn keeps(&self, package: &str) -> bool {
        !self.exclude.iter().any(|pattern| pattern.matches(package))
    }
}

/// Find every importable package under `root`, as sorted dotted names.
///
/// A directory is a package when its name contains no `.` and it carries
/// the `__init__.py` marker. Directories that are not packages are pruned
/// from the walk. An excluded package is withheld from the result but its
/// subtree is still searched, so `--exclude tests` alone does not hide
/// `tests.fixtures`.
///
/// A missing root is a valid empty tree, not an error, and a directory
/// that cannot be listed is skipped rather than aborting the scan.
#[tracing::instrument(skip(runtime))]
pub fn find_packages<R: Runtime>(runtime: &R, root: &Path, filter: &PackageFilter) -> Vec<String> {
    let mut packages = Vec::new();

    if !runtime.is_dir(root) {
        log::debug!("Source root {:?} is not a directory", root);
        return packages;
    }

    walk(runtime, root, None, filter, &mut packages);
    packages.sort();
    packages
}

fn walk<R: Runtime>(
    runtime: &R,
    dir: &Path,
    parent: Option<&str>,
    filter: &PackageFilter,
    packages: &mut Vec<String>,
) {
    let entries = match runtime.read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("Skipping unreadable directory {:?}: {}", dir, e);
            return;
        }
    };

    for entry in entries {
        if !runtime.is_dir(&entry) {
            continue;
        }
        let Some(name) = entry.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        // A dot can never appear in an importable name
        if name.contains('.') {
            continue;
        }
        if !runtime.exists(&entry.join(PACKAGE_MARKER)) {
            continue;
        }

        let package = match parent {
            Some(prefix) => format!("{}.{}", prefix, name),
            None => name.to_string(),
        };

        if filter.keeps(&package) {
            packages.push(package.clone());
        }

        walk(runtime, &entry, Some(&package), filter, packages);
    }
}
