use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::dist::{PackageFilter, find_packages};
use crate::runtime::Runtime;

use super::resolve_source_root;

/// Run package discovery alone and print one dotted name per line
#[tracing::instrument(skip(runtime, directory))]
pub fn packages<R: Runtime>(
    runtime: R,
    directory: Option<PathBuf>,
    exclude: Vec<String>,
) -> Result<()> {
    let root = resolve_source_root(&runtime, directory)?;
    debug!("Discovering packages under {:?}", root);

    let filter = PackageFilter::new(&exclude)?;
    let found = find_packages(&runtime, &root, &filter);
    if found.is_empty() {
        println!("No packages found.");
        return Ok(());
    }

    debug!("Found {} package(s)", found.len());

    for package in &found {
        println!("{}", package);
    }

    Ok(())
}
