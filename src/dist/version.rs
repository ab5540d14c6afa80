use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::runtime::Runtime;

/// Attribute that carries the canonical version of the described library.
pub const VERSION_ATTRIBUTE: &str = "__version__";

/// The version attribute could not be read from the source tree.
///
/// This is the only failure the descriptor itself produces. No partial
/// record exists when it is raised.
#[derive(Error, Debug)]
#[error("metadata source unavailable: {reason} ({})", path.display())]
pub struct MetadataSourceUnavailable {
    pub path: PathBuf,
    pub reason: String,
}

/// Read the canonical version from the library's version-source file.
///
/// The file is scanned for a top-level `__version__ = "..."` assignment
/// (single or double quoted); the first one wins. The record carries this
/// value verbatim, so the version can never drift from the tree.
#[tracing::instrument(skip(runtime))]
pub fn read_version<R: Runtime>(
    runtime: &R,
    path: &Path,
) -> Result<String, MetadataSourceUnavailable> {
    let source = runtime
        .read_to_string(path)
        .map_err(|e| MetadataSourceUnavailable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let pattern = Regex::new(&format!(
        r#"(?m)^{}\s*=\s*['"]([^'"]+)['"]"#,
        VERSION_ATTRIBUTE
    ))
    .expect("version attribute pattern is valid");

    match pattern.captures(&source) {
        Some(captures) => {
            let version = captures[1].to_string();
            log::debug!("Read version {} from {:?}", version, path);
            Ok(version)
        }
        None => Err(MetadataSourceUnavailable {
            path: path.to_path_buf(),
            reason: format!("no {} assignment found", VERSION_ATTRIBUTE),
        }),
    }
}
