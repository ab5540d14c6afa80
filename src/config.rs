//! Declared configuration.
//!
//! Everything the metadata record does not derive from the source tree is
//! declared here and injected into the descriptor by the caller. Nothing in
//! this module reads files or environment state.

use std::path::PathBuf;

use crate::dist::Pin;

/// The declared half of a metadata record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistConfig {
    pub name: String,
    /// Runtime constraint as declared, e.g. `>=3.5`.
    pub python_requires: String,
    pub author: String,
    pub author_email: String,
    pub url: String,
    pub description: String,
    pub license: String,
    /// Tree-relative path of the file carrying the `__version__` attribute.
    pub version_source: PathBuf,
    pub zip_safe: bool,
    /// Exact pins, in declaration order.
    pub requires: Vec<Pin>,
    /// Glob patterns withheld from package discovery.
    pub exclude: Vec<String>,
}

impl DistConfig {
    /// The declaration this tool ships: the packaging surface of the d2l
    /// "Dive into Deep Learning" companion library.
    ///
    /// The pins are carried verbatim from the declaration, including the
    /// versions that have long since been superseded upstream. Loosening or
    /// refreshing them is a declaration change, never something the
    /// descriptor does on its own.
    pub fn declared() -> Self {
        DistConfig {
            name: "d2l".to_string(),
            python_requires: ">=3.5".to_string(),
            author: "D2L Developers".to_string(),
            author_email: "d2l.devs@gmail.com".to_string(),
            url: "https://d2l.ai".to_string(),
            description: "Dive into Deep Learning".to_string(),
            license: "MIT-0".to_string(),
            version_source: PathBuf::from("d2l/__init__.py"),
            zip_safe: true,
            requires: vec![
                Pin::new("jupyter", "1.0.0"),
                Pin::new("numpy", "1.21.5"),
                Pin::new("matplotlib", "3.5.1"),
                Pin::new("requests", "2.25.1"),
                Pin::new("pandas", "1.2.4"),
            ],
            exclude: Vec::new(),
        }
    }
}
