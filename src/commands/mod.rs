//! Command layer.
//!
//! One function per CLI verb. Commands resolve the source-tree root, drive
//! the descriptor and render the outcome to stdout; none of them mutates
//! the tree.
//!
//! # Structure
//!
//! - `check` - Validate the metadata record
//! - `describe` - Print the full metadata record
//! - `packages` - Print the discovered packages

mod check;
mod describe;
mod packages;

pub use check::check;
pub use describe::describe;
pub use packages::packages;

use anyhow::Result;
use std::path::PathBuf;

use crate::runtime::Runtime;

/// Resolve the source-tree root: an explicit path wins, otherwise the
/// process working directory.
pub(crate) fn resolve_source_root<R: Runtime>(
    runtime: &R,
    directory: Option<PathBuf>,
) -> Result<PathBuf> {
    match directory {
        Some(path) => Ok(path),
        None => runtime.current_dir(),
    }
}
