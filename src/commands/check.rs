use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::{config::DistConfig, dist::Descriptor, runtime::Runtime};

use super::resolve_source_root;

/// Build the metadata record and verify it is well formed
#[tracing::instrument(skip(runtime, directory, config))]
pub fn check<R: Runtime>(
    runtime: R,
    directory: Option<PathBuf>,
    config: DistConfig,
) -> Result<()> {
    let root = resolve_source_root(&runtime, directory)?;
    debug!("Checking source tree at {:?}", root);

    let descriptor = Descriptor::new(&runtime, root, config)?;
    let meta = descriptor.describe()?;

    let issues = meta.issues();
    if !issues.is_empty() {
        anyhow::bail!(
            "{} issue(s) in the metadata record:\n  {}",
            issues.len(),
            issues.join("\n  ")
        );
    }

    println!(
        "ok: {} {} ({} package(s), {} pin(s))",
        meta.name,
        meta.version,
        meta.packages.len(),
        meta.requires.len()
    );

    Ok(())
}
