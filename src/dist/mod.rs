//! The package descriptor domain.
//!
//! One operation lives here: fold the declared configuration, the version
//! read from the library's own source, and a package-discovery scan into a
//! single immutable metadata record.
//!
//! # Structure
//!
//! - `descriptor` - Record construction
//! - `discovery` - Package discovery and exclude filtering
//! - `meta` - The metadata record itself
//! - `pin` - Exact dependency pins
//! - `version` - Version source reading

mod descriptor;
mod discovery;
mod meta;
mod pin;
mod version;

pub use descriptor::Descriptor;
pub use discovery::{PACKAGE_MARKER, PackageFilter, find_packages};
pub use meta::DistMeta;
pub use pin::Pin;
pub use version::{MetadataSourceUnavailable, VERSION_ATTRIBUTE, read_version};
