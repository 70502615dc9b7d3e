//! Content-type manifest (`[Content_Types].xml`) index.
//!
//! Only the manifest's shape matters here: the ordered list of `Override`
//! entries drives discovery of optional parts, and declaration order becomes
//! the iteration order of the parts discovered for each role. No further
//! validation of content types is performed.

use crate::common::xml::XmlTree;
use crate::ooxml::opc::error::{OpcError, Result};

/// One `<Override PartName=".." ContentType=".."/>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestOverride {
    /// Archive path: the part name without its leading `/`.
    pub part_path: String,
    /// The `PartName` attribute exactly as declared.
    pub part_name: String,
    pub content_type: String,
}

/// One `<Default Extension=".." ContentType=".."/>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestDefault {
    pub extension: String,
    pub content_type: String,
}

/// Parsed content-type manifest, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ManifestIndex {
    overrides: Vec<ManifestOverride>,
    defaults: Vec<ManifestDefault>,
}

impl ManifestIndex {
    /// Parse manifest bytes.
    ///
    /// # Errors
    ///
    /// Returns [`OpcError::ManifestParse`] when the manifest is not
    /// well-formed XML. Entries missing their attributes are ignored.
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let tree = XmlTree::parse(xml).map_err(|e| OpcError::ManifestParse(e.to_string()))?;
        let types = tree.node();

        let overrides = types
            .children("Override")
            .filter_map(|node| {
                let part_name = node.attribute("PartName")?;
                Some(ManifestOverride {
                    part_path: part_name
                        .strip_prefix('/')
                        .unwrap_or(part_name)
                        .to_string(),
                    part_name: part_name.to_string(),
                    content_type: node.attribute("ContentType").unwrap_or_default().to_string(),
                })
            })
            .collect();

        let defaults = types
            .children("Default")
            .filter_map(|node| {
                Some(ManifestDefault {
                    extension: node.attribute("Extension")?.to_ascii_lowercase(),
                    content_type: node.attribute("ContentType")?.to_string(),
                })
            })
            .collect();

        Ok(Self {
            overrides,
            defaults,
        })
    }

    /// Override entries in declaration order.
    #[inline]
    pub fn overrides(&self) -> &[ManifestOverride] {
        &self.overrides
    }

    #[inline]
    pub fn defaults(&self) -> &[ManifestDefault] {
        &self.defaults
    }

    /// Content type for an archive path: the override if one is declared,
    /// otherwise the default for the path's extension.
    pub fn content_type_for(&self, part_path: &str) -> Option<&str> {
        if let Some(o) = self.overrides.iter().find(|o| o.part_path == part_path) {
            return Some(&o.content_type);
        }
        let ext = part_path.rsplit_once('.')?.1.to_ascii_lowercase();
        self.defaults
            .iter()
            .find(|d| d.extension == ext)
            .map(|d| d.content_type.as_str())
    }
}
