use anyhow::Result;
use std::path::PathBuf;

use crate::config::DistConfig;
use crate::runtime::Runtime;

use super::{DistMeta, MetadataSourceUnavailable, PackageFilter, find_packages, read_version};

/// Builds the metadata record for one source tree.
///
/// The declared configuration is injected at construction, never read from
/// ambient process state, so every field of the resulting record has a
/// single visible source: the configuration, or the tree itself.
pub struct Descriptor<'a, R: Runtime> {
    runtime: &'a R,
    source_root: PathBuf,
    config: DistConfig,
    filter: PackageFilter,
}

impl<'a, R: Runtime> Descriptor<'a, R> {
    /// Fails only when the configuration carries an invalid exclude
    /// pattern.
    pub fn new(runtime: &'a R, source_root: PathBuf, config: DistConfig) -> Result<Self> {
        let filter = PackageFilter::new(&config.exclude)?;
        Ok(Descriptor {
            runtime,
            source_root,
            config,
            filter,
        })
    }

    /// Absolute path of the file carrying the version attribute.
    pub fn version_source(&self) -> PathBuf {
        self.source_root.join(&self.config.version_source)
    }

    /// Construct the record: declared fields verbatim, the version read
    /// from the tree, packages discovered fresh.
    ///
    /// The only failure is an unreadable version source. A tree with no
    /// packages yields a record with an empty package list, not an error.
    #[tracing::instrument(skip(self))]
    pub fn describe(&self) -> Result<DistMeta, MetadataSourceUnavailable> {
        let version = read_version(self.runtime, &self.version_source())?;
        let packages = self.packages();

        Ok(DistMeta {
            name: self.config.name.clone(),
            version,
            python_requires: self.config.python_requires.clone(),
            author: self.config.author.clone(),
            author_email: self.config.author_email.clone(),
            url: self.config.url.clone(),
            description: self.config.description.clone(),
            license: self.config.license.clone(),
            requires: self.config.requires.clone(),
            packages,
            zip_safe: self.config.zip_safe,
        })
    }

    /// Run the discovery step alone.
    #[tracing::instrument(skip(self))]
    pub fn packages(&self) -> Vec<String> {
        find_packages(self.runtime, &self.source_root, &self.filter)
    }
}
