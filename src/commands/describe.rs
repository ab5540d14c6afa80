use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::{
    config::DistConfig,
    dist::{Descriptor, DistMeta},
    runtime::Runtime,
};

use super::resolve_source_root;

/// Build the metadata record for a source tree and print it
#[tracing::instrument(skip(runtime, directory, config))]
pub fn describe<R: Runtime>(
    runtime: R,
    directory: Option<PathBuf>,
    config: DistConfig,
    json: bool,
) -> Result<()> {
    let root = resolve_source_root(&runtime, directory)?;
    debug!("Describing source tree at {:?}", root);

    let descriptor = Descriptor::new(&runtime, root, config)?;
    let meta = descriptor.describe()?;
    debug!(
        "Built record for {} {} with {} package(s)",
        meta.name,
        meta.version,
        meta.packages.len()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&meta)?);
    } else {
        print_meta(&meta);
    }

    Ok(())
}

fn print_meta(meta: &DistMeta) {
    println!("Package: {} {}", meta.name, meta.version);
    println!("Description: {}", meta.description);
    println!("Author: {} <{}>", meta.author, meta.author_email);
    println!("Homepage: {}", meta.url);
    println!("License: {}", meta.license);
    println!("Requires Python: {}", meta.python_requires);
    println!("Zip safe: {}", if meta.zip_safe { "yes" } else { "no" });

    println!("\nRequires:");
    for pin in &meta.requires {
        println!("  {}", pin);
    }
    if meta.requires.is_empty() {
        println!("  (none)");
    }

    println!("\nPackages:");
    for package in &meta.packages {
        println!("  {}", package);
    }
    if meta.packages.is_empty() {
        println!("  (none)");
    }
}
