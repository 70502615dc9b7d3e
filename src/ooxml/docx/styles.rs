//! Run property helpers shared by the document model and its projections.
//!
//! WordprocessingML stores sizes in half-points (`<w:sz w:val="24"/>` is
//! 12pt) and toggles such as `<w:b/>` as presence flags with an optional
//! `w:val` override.

use crate::common::xml::XmlNode;

/// Path from a styles part root to the default run size element.
const DEFAULT_SIZE_PATH: &[&str] = &["w:docDefaults", "w:rPrDefault", "w:rPr", "w:sz"];

/// Properties derived once from the styles part and handed to projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentProperties {
    /// Default run size in whole points, if the styles declare one.
    pub font_size: Option<u32>,
}

impl DocumentProperties {
    /// Derive the snapshot from a styles part root.
    pub fn from_styles(styles: XmlNode<'_>) -> Self {
        Self {
            font_size: default_font_size(styles),
        }
    }
}

/// The document-wide default run size in points.
///
/// Half-point values are truncated, so `25` yields `12`.
pub fn default_font_size(styles: XmlNode<'_>) -> Option<u32> {
    styles.find(DEFAULT_SIZE_PATH).and_then(half_points)
}

/// Read a `w:val` half-point value and convert it to whole points.
pub(crate) fn half_points(size: XmlNode<'_>) -> Option<u32> {
    let val = size.attribute("w:val")?;
    atoi_simd::parse::<u32, false, false>(val.trim().as_bytes())
        .ok()
        .map(|half| half / 2)
}

/// Evaluate an on/off property such as `w:b` inside a property container.
///
/// Returns `None` when the property is absent, so the caller can fall back
/// to inherited formatting.
pub(crate) fn toggle(properties: Option<XmlNode<'_>>, name: &str) -> Option<bool> {
    let element = properties?.child(name)?;
    Some(match element.attribute("w:val") {
        Some(val) => !matches!(val, "0" | "false" | "off" | "none"),
        None => true,
    })
}
