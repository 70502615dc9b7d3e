//! Fixture archives for tests.

use crate::ooxml::opc::phys_pkg::PhysPkgWriter;
use zip::CompressionMethod;

pub(crate) const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Build a deflated ZIP archive from `(entry name, content)` pairs.
pub(crate) fn build_archive(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = PhysPkgWriter::in_memory();
    for (name, content) in entries {
        writer
            .write(name, content.as_bytes(), CompressionMethod::Deflated)
            .unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Manifest declaring `parts` as overrides (archive paths, no leading `/`).
pub(crate) fn manifest(parts: &[&str]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/>"#,
    );
    for part in parts {
        xml.push_str(&format!(
            r#"<Override PartName="/{part}" ContentType="application/xml"/>"#
        ));
    }
    xml.push_str("</Types>");
    xml
}

/// Main document part wrapping `body` in `w:document/w:body`.
pub(crate) fn document_xml(body: &str) -> String {
    format!(r#"<w:document xmlns:w="{W_NS}"><w:body>{body}</w:body></w:document>"#)
}

/// Styles part with a default run size of `half_points`, if any.
pub(crate) fn styles_xml(half_points: Option<u32>) -> String {
    let defaults = half_points
        .map(|sz| {
            format!(
                r#"<w:docDefaults><w:rPrDefault><w:rPr><w:sz w:val="{sz}"/></w:rPr></w:rPrDefault></w:docDefaults>"#
            )
        })
        .unwrap_or_default();
    format!(r#"<w:styles xmlns:w="{W_NS}">{defaults}</w:styles>"#)
}

/// A minimal .docx: manifest, main document, styles and `extra` entries.
///
/// Every `declared` path is listed in the manifest whether or not it is
/// among `extra`.
pub(crate) fn minimal_docx(body: &str, declared: &[&str], extra: &[(&str, &str)]) -> Vec<u8> {
    let mut parts = vec!["word/document.xml", "word/styles.xml"];
    parts.extend_from_slice(declared);
    let manifest = manifest(&parts);
    let document = document_xml(body);
    let styles = styles_xml(Some(24));

    let mut entries = vec![
        ("[Content_Types].xml", manifest.as_str()),
        ("word/document.xml", document.as_str()),
        ("word/styles.xml", styles.as_str()),
    ];
    entries.extend_from_slice(extra);
    build_archive(&entries)
}

/// A minimal .xlsx: manifest, workbook, shared strings, styles and `extra`
/// entries, with every `declared` path listed in the manifest.
pub(crate) fn minimal_xlsx(declared: &[&str], extra: &[(&str, &str)]) -> Vec<u8> {
    const SML: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
    let mut parts = vec!["xl/workbook.xml", "xl/sharedStrings.xml", "xl/styles.xml"];
    parts.extend_from_slice(declared);
    let manifest = manifest(&parts);
    let workbook = format!(r#"<workbook xmlns="{SML}"><sheets><sheet name="Sheet1" sheetId="1"/></sheets></workbook>"#);
    let shared = format!(r#"<sst xmlns="{SML}" count="1" uniqueCount="1"><si><t>hello</t></si></sst>"#);
    let styles = format!(r#"<styleSheet xmlns="{SML}"><fonts count="1"><font><sz val="11"/></font></fonts></styleSheet>"#);

    let mut entries = vec![
        ("[Content_Types].xml", manifest.as_str()),
        ("xl/workbook.xml", workbook.as_str()),
        ("xl/sharedStrings.xml", shared.as_str()),
        ("xl/styles.xml", styles.as_str()),
    ];
    entries.extend_from_slice(extra);
    build_archive(&entries)
}
