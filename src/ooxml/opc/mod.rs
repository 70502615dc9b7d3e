//! Open Packaging Conventions (OPC) package core.
//!
//! This module provides read/modify/write access to the ZIP container behind
//! Office Open XML documents:
//!
//! - Content-type manifest parsing (`[Content_Types].xml`)
//! - Manifest-driven discovery and loading of XML parts
//! - Namespace normalization so queries can rely on fixed prefixes
//! - Tracked mutation of part trees
//! - Write-back that substitutes only modified entries and copies every
//!   other entry from the source archive untouched

pub mod constants;
pub mod content_types;
pub mod error;
pub mod namespace;
pub mod package;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export commonly used types
pub use content_types::{ManifestIndex, ManifestOverride};
pub use error::{OpcError, Result};
pub use namespace::NamespaceCategory;
pub use package::{OpenOptions, Package, PackageLayout};
pub use part::{Part, PartMut, PartRole};
pub use pkgwriter::{EditBuffer, SaveCompression};
