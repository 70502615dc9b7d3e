//! Namespace normalization for loaded parts.
//!
//! Producers are free to declare namespaces wherever and however they like.
//! Queries in this crate are written against fixed prefixes (`w:p`,
//! `w:bookmarkStart`, ...) that resolve through the root element, so every
//! part gets a canonical set of declarations written onto its root before it
//! is queried. Only the root's attributes change; content nodes are never
//! touched.

use crate::common::xml::{XmlError, XmlTree};
use crate::ooxml::opc::constants::{MC_IGNORABLE, namespace as ns};

/// Which canonical declaration set a part receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamespaceCategory {
    /// WordprocessingML parts: main document, headers/footers, styles.
    Base,
    /// Chart, diagram, drawing and comment parts: the base set plus DrawingML.
    Extended,
    /// No declarations are added; the part only goes through the
    /// canonicalizing serialize/parse pass.
    Canonical,
}

const BASE: &[(&str, &str)] = &[
    ("xmlns:wp14", ns::WP14),
    ("xmlns:wp", ns::WP),
    ("xmlns:w10", ns::W10),
    ("xmlns:w", ns::W),
    ("xmlns:w14", ns::W14),
    ("xmlns:w15", ns::W15),
    ("xmlns:w16cid", ns::W16CID),
    ("xmlns:w16se", ns::W16SE),
    ("mc:Ignorable", MC_IGNORABLE),
    ("xmlns:mc", ns::MC),
    ("xmlns:wps", ns::WPS),
    ("xmlns:r", ns::R),
    ("xmlns:m", ns::M),
    ("xmlns:v", ns::V),
];

const DRAWINGML: &[(&str, &str)] = &[("xmlns:c", ns::C), ("xmlns:a", ns::A)];

impl NamespaceCategory {
    /// Root attributes this category writes, in the order they are applied.
    pub fn declarations(self) -> impl Iterator<Item = (&'static str, &'static str)> {
        let sets: &[&[(&str, &str)]] = match self {
            NamespaceCategory::Base => &[BASE],
            NamespaceCategory::Extended => &[BASE, DRAWINGML],
            NamespaceCategory::Canonical => &[],
        };
        sets.iter().flat_map(|set| set.iter().copied())
    }
}

/// Write the category's declarations onto the root, then pass the tree once
/// through serialize and parse.
///
/// Each declaration overwrites the same fixed key, so normalizing an already
/// normalized tree leaves its attribute set unchanged.
pub fn normalize(mut tree: XmlTree, category: NamespaceCategory) -> Result<XmlTree, XmlError> {
    let root = tree.root_mut();
    for (name, value) in category.declarations() {
        root.set_attribute(name, value);
    }
    XmlTree::parse(&tree.to_bytes())
}
