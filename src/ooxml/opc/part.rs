//! Package parts and the loader that resolves them from the manifest.
//!
//! A [`Part`] is one archive path plus its normalized XML tree. Parts are
//! owned by their package; read access hands out the tree directly, while
//! write access goes through [`PartMut`], which records that the part must be
//! re-serialized when the package is saved.

use crate::common::xml::{XmlNode, XmlTree};
use crate::ooxml::opc::content_types::ManifestIndex;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::namespace::{NamespaceCategory, normalize};
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use memchr::memmem;
use std::ops::{Deref, DerefMut};

/// The structural role a part plays in its package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartRole {
    MainDocument,
    Workbook,
    Styles,
    SharedStrings,
    HeaderFooter,
    Chart,
    Diagram,
    Drawing,
    Comment,
    Worksheet,
}

/// A loaded XML part.
#[derive(Debug, Clone)]
pub struct Part {
    path: String,
    role: PartRole,
    tree: XmlTree,
    content_type: Option<String>,
    dirty: bool,
}

impl Part {
    pub(crate) fn new(path: String, role: PartRole, tree: XmlTree) -> Self {
        Self {
            path,
            role,
            tree,
            content_type: None,
            dirty: false,
        }
    }

    pub(crate) fn with_content_type(mut self, content_type: Option<&str>) -> Self {
        self.content_type = content_type.map(str::to_string);
        self
    }

    /// Archive path of this part, e.g. `word/header1.xml`.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn role(&self) -> PartRole {
        self.role
    }

    /// Content type the manifest assigns to this part, by override or by
    /// extension default.
    #[inline]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    #[inline]
    pub fn tree(&self) -> &XmlTree {
        &self.tree
    }

    /// Query handle positioned at the part's root element.
    #[inline]
    pub fn node(&self) -> XmlNode<'_> {
        self.tree.node()
    }

    /// Whether the tree has been handed out for mutation.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Serialize the current tree.
    #[inline]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.tree.to_bytes()
    }
}

/// Tracked mutable access to a part's tree.
///
/// Dereferencing mutably marks the part dirty; only dirty parts are
/// serialized into the package on save.
pub struct PartMut<'a> {
    part: &'a mut Part,
}

impl<'a> PartMut<'a> {
    pub(crate) fn new(part: &'a mut Part) -> Self {
        Self { part }
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.part.path
    }

    /// Replace the whole tree.
    pub fn replace(&mut self, tree: XmlTree) {
        self.part.dirty = true;
        self.part.tree = tree;
    }
}

impl Deref for PartMut<'_> {
    type Target = XmlTree;

    fn deref(&self) -> &XmlTree {
        &self.part.tree
    }
}

impl DerefMut for PartMut<'_> {
    fn deref_mut(&mut self) -> &mut XmlTree {
        self.part.dirty = true;
        &mut self.part.tree
    }
}

/// A part every package of a given kind must carry.
#[derive(Debug, Clone, Copy)]
pub struct RequiredPart {
    pub path: &'static str,
    pub role: PartRole,
    pub category: NamespaceCategory,
}

/// An optional role discovered through manifest `PartName` substrings.
#[derive(Debug, Clone, Copy)]
pub struct OptionalRole {
    pub role: PartRole,
    pub hints: &'static [&'static str],
    pub category: NamespaceCategory,
}

impl OptionalRole {
    /// Whether a manifest `PartName` contains any of this role's hints.
    pub fn matches(&self, part_name: &str) -> bool {
        self.hints
            .iter()
            .any(|hint| memmem::find(part_name.as_bytes(), hint.as_bytes()).is_some())
    }
}

/// Resolves and loads parts from an open archive.
pub struct PartLoader;

impl PartLoader {
    /// Archive paths of manifest overrides whose `PartName` satisfies
    /// `predicate`, in manifest declaration order.
    pub fn discover<'m>(
        manifest: &'m ManifestIndex,
        predicate: impl Fn(&str) -> bool,
    ) -> Vec<&'m str> {
        manifest
            .overrides()
            .iter()
            .filter(|o| predicate(&o.part_name))
            .map(|o| o.part_path.as_str())
            .collect()
    }

    /// Raw bytes of an entry, or `None` when the archive has no such entry.
    pub fn load(reader: &mut PhysPkgReader, part_path: &str) -> Result<Option<Vec<u8>>> {
        if !reader.contains(part_path) {
            return Ok(None);
        }
        reader.blob_for(part_path).map(Some)
    }

    /// Load, parse and (optionally) normalize a required part.
    ///
    /// # Errors
    ///
    /// [`OpcError::MissingPart`] if the entry is absent, [`OpcError::Xml`] if
    /// it is not well-formed.
    pub fn load_required(
        reader: &mut PhysPkgReader,
        required: &RequiredPart,
        normalize_namespaces: bool,
    ) -> Result<Part> {
        let bytes = Self::load(reader, required.path)?
            .ok_or_else(|| OpcError::MissingPart(required.path.to_string()))?;
        Self::build(
            required.path,
            required.role,
            required.category,
            &bytes,
            normalize_namespaces,
        )
    }

    /// Load, parse and (optionally) normalize a part.
    ///
    /// Returns `Ok(None)` when the entry is absent from the archive.
    pub fn load_optional(
        reader: &mut PhysPkgReader,
        part_path: &str,
        role: &OptionalRole,
        normalize_namespaces: bool,
    ) -> Result<Option<Part>> {
        match Self::load(reader, part_path)? {
            Some(bytes) => Self::build(
                part_path,
                role.role,
                role.category,
                &bytes,
                normalize_namespaces,
            )
            .map(Some),
            None => Ok(None),
        }
    }

    fn build(
        path: &str,
        role: PartRole,
        category: NamespaceCategory,
        bytes: &[u8],
        normalize_namespaces: bool,
    ) -> Result<Part> {
        let tree = XmlTree::parse(bytes).map_err(|e| OpcError::xml(path, e))?;
        let category = if normalize_namespaces {
            category
        } else {
            NamespaceCategory::Canonical
        };
        let tree = normalize(tree, category).map_err(|e| OpcError::xml(path, e))?;
        Ok(Part::new(path.to_string(), role, tree))
    }
}
