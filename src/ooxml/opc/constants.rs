//! Constant values related to the Open Packaging Convention.
//!
//! This module contains the fixed archive paths of required parts, the
//! manifest substrings used to discover optional parts, and the XML
//! namespaces declared on normalized part roots.

/// Archive path of the content-type manifest.
pub const CONTENT_TYPES_PATH: &str = "[Content_Types].xml";

/// Fixed archive paths of parts every package of a given kind must carry.
pub mod part_path {
    // WordprocessingML
    pub const WML_DOCUMENT: &str = "word/document.xml";
    pub const WML_STYLES: &str = "word/styles.xml";

    // SpreadsheetML
    pub const SML_WORKBOOK: &str = "xl/workbook.xml";
    pub const SML_SHARED_STRINGS: &str = "xl/sharedStrings.xml";
    pub const SML_STYLES: &str = "xl/styles.xml";
}

/// Substrings of a manifest `PartName` that identify optional part roles.
pub mod part_name_hint {
    pub const HEADER: &str = "header";
    pub const FOOTER: &str = "footer";
    pub const CHART: &str = "charts/ch";
    pub const DIAGRAM: &str = "diagrams";
    pub const DRAWING: &str = "drawings";
    pub const COMMENT: &str = "comments";
    pub const WORKSHEET: &str = "worksheets";
}

/// XML namespace URIs used by normalized parts.
pub mod namespace {
    pub const CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

    pub const WP14: &str = "http://schemas.microsoft.com/office/word/2010/wordprocessingDrawing";
    pub const WP: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
    pub const W10: &str = "urn:schemas-microsoft-com:office:word";
    pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    pub const W14: &str = "http://schemas.microsoft.com/office/word/2010/wordml";
    pub const W15: &str = "http://schemas.microsoft.com/office/word/2012/wordml";
    pub const W16CID: &str = "http://schemas.microsoft.com/office/word/2016/wordml/cid";
    pub const W16SE: &str = "http://schemas.microsoft.com/office/word/2015/wordml/symex";
    pub const MC: &str = "http://schemas.openxmlformats.org/markup-compatibility/2006";
    pub const WPS: &str = "http://schemas.microsoft.com/office/word/2010/wordprocessingShape";
    pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    pub const M: &str = "http://schemas.openxmlformats.org/officeDocument/2006/math";
    pub const V: &str = "urn:schemas-microsoft-com:vml";

    // DrawingML
    pub const C: &str = "http://schemas.openxmlformats.org/drawingml/2006/chart";
    pub const A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
}

/// Value written to `mc:Ignorable` on normalized roots.
pub const MC_IGNORABLE: &str = "w14 w15 w16se w16cid wp14";
