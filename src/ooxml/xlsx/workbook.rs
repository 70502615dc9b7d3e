//! Excel workbook model.
//!
//! Structurally parallel to the Word document model: the same query surface
//! is available through [`PackageModel`], but its paragraph, table and
//! bookmark queries look for WordprocessingML elements and so yield nothing
//! for spreadsheet content. Spreadsheet data is reached through the part
//! accessors.
use crate::ooxml::model::PackageModel;
use crate::ooxml::opc::constants::{part_name_hint, part_path};
use crate::ooxml::opc::part::{OptionalRole, RequiredPart};
use crate::ooxml::opc::{NamespaceCategory, Package, PackageLayout, Part, PartRole};

/// Parts of a SpreadsheetML package.
pub const SPREADSHEET: PackageLayout = PackageLayout {
    required: &[
        RequiredPart {
            path: part_path::SML_WORKBOOK,
            role: PartRole::Workbook,
            category: NamespaceCategory::Canonical,
        },
        RequiredPart {
            path: part_path::SML_SHARED_STRINGS,
            role: PartRole::SharedStrings,
            category: NamespaceCategory::Canonical,
        },
        RequiredPart {
            path: part_path::SML_STYLES,
            role: PartRole::Styles,
            category: NamespaceCategory::Canonical,
        },
    ],
    optional: &[
        OptionalRole {
            role: PartRole::Worksheet,
            hints: &[part_name_hint::WORKSHEET],
            category: NamespaceCategory::Canonical,
        },
        OptionalRole {
            role: PartRole::Chart,
            hints: &[part_name_hint::CHART],
            category: NamespaceCategory::Extended,
        },
        OptionalRole {
            role: PartRole::Drawing,
            hints: &[part_name_hint::DRAWING],
            category: NamespaceCategory::Extended,
        },
        OptionalRole {
            role: PartRole::Comment,
            hints: &[part_name_hint::COMMENT],
            category: NamespaceCategory::Extended,
        },
    ],
};

/// An opened Excel workbook (.xlsx).
///
/// # Examples
///
/// ```rust,no_run
/// use opcedit::{PackageModel, Workbook};
///
/// let mut workbook = Workbook::open("book.xlsx")?;
/// for sheet in workbook.worksheets() {
///     println!("{}", sheet.path());
/// }
/// workbook.save_to_buffer()?;
/// # Ok::<(), opcedit::OpcError>(())
/// ```
pub struct Workbook {
    package: Package,
}

impl PackageModel for Workbook {
    const LAYOUT: PackageLayout = SPREADSHEET;
    const MAIN_SLOT: usize = 0;
    const STYLES_SLOT: usize = 2;

    fn from_package(package: Package) -> Self {
        Self { package }
    }

    #[inline]
    fn package(&self) -> &Package {
        &self.package
    }

    #[inline]
    fn package_mut(&mut self) -> &mut Package {
        &mut self.package
    }

    fn into_package(self) -> Package {
        self.package
    }
}

impl Workbook {
    /// The `xl/workbook.xml` part.
    #[inline]
    pub fn workbook_part(&self) -> &Part {
        self.main_part()
    }

    #[inline]
    pub fn shared_strings_part(&self) -> &Part {
        self.package.required(1)
    }

    /// Loaded worksheet parts, in manifest order.
    pub fn worksheets(&self) -> impl Iterator<Item = &Part> {
        self.package.parts_with_role(PartRole::Worksheet)
    }

    pub fn charts(&self) -> impl Iterator<Item = &Part> {
        self.package.parts_with_role(PartRole::Chart)
    }

    pub fn drawings(&self) -> impl Iterator<Item = &Part> {
        self.package.parts_with_role(PartRole::Drawing)
    }

    pub fn comments(&self) -> impl Iterator<Item = &Part> {
        self.package.parts_with_role(PartRole::Comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::namespace as ns;
    use crate::ooxml::opc::phys_pkg::PhysPkgReader;
    use crate::ooxml::opc::testutil::{build_archive, manifest, minimal_xlsx};
    use crate::ooxml::opc::OpcError;

    const SHEET: &str = r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData><row r="1"><c r="A1" t="s"><v>0</v></c></row></sheetData></worksheet>"#;
    const CHART: &str = r#"<c:chartSpace xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart"><c:chart/></c:chartSpace>"#;

    fn sample() -> Vec<u8> {
        minimal_xlsx(
            &[
                "xl/worksheets/sheet1.xml",
                "xl/worksheets/sheet2.xml",
                "xl/charts/chart1.xml",
                "xl/drawings/drawing1.xml",
                "xl/comments1.xml",
            ],
            &[
                ("xl/worksheets/sheet1.xml", SHEET),
                ("xl/charts/chart1.xml", CHART),
                ("xl/drawings/drawing1.xml", r#"<xdr:wsDr xmlns:xdr="urn:xdr"/>"#),
                ("xl/comments1.xml", r#"<comments xmlns="urn:sml"/>"#),
            ],
        )
    }

    #[test]
    fn test_parts_by_role() {
        let workbook = Workbook::from_bytes(sample()).unwrap();
        assert_eq!(workbook.workbook_part().path(), "xl/workbook.xml");
        assert_eq!(workbook.shared_strings_part().path(), "xl/sharedStrings.xml");
        assert_eq!(workbook.styles_part().path(), "xl/styles.xml");

        let sheets: Vec<&str> = workbook.worksheets().map(Part::path).collect();
        assert_eq!(sheets, vec!["xl/worksheets/sheet1.xml"]);
        assert_eq!(workbook.skipped_parts(), ["xl/worksheets/sheet2.xml".to_string()]);
        assert_eq!(workbook.charts().count(), 1);
        assert_eq!(workbook.drawings().count(), 1);
        assert_eq!(workbook.comments().count(), 1);
    }

    #[test]
    fn test_namespace_categories() {
        let workbook = Workbook::from_bytes(sample()).unwrap();
        // Canonical parts get no declarations
        assert_eq!(workbook.workbook_part().tree().root().attribute("xmlns:w"), None);
        let sheet = workbook.worksheets().next().unwrap();
        assert_eq!(sheet.tree().root().attribute("mc:Ignorable"), None);
        // Extended parts get the base set plus DrawingML
        let drawing = workbook.drawings().next().unwrap();
        assert_eq!(drawing.tree().root().attribute("xmlns:a"), Some(ns::A));
        assert_eq!(drawing.tree().root().attribute("xmlns:w"), Some(ns::W));
    }

    #[test]
    fn test_word_queries_are_empty() {
        let workbook = Workbook::from_bytes(sample()).unwrap();
        assert_eq!(workbook.paragraphs().count(), 0);
        assert_eq!(workbook.tables().count(), 0);
        assert!(workbook.bookmarks().is_empty());
        assert_eq!(workbook.font_size(), None);
        assert_eq!(workbook.to_text(), "");
        assert_eq!(workbook.to_html(), "");
    }

    #[test]
    fn test_untouched_save_is_faithful() {
        let source = sample();
        let mut workbook = Workbook::from_bytes(source.clone()).unwrap();
        let saved = workbook.save_to_buffer().unwrap();

        let mut original = PhysPkgReader::from_bytes(source).unwrap();
        let mut copy = PhysPkgReader::from_bytes(saved).unwrap();
        assert_eq!(original.member_names(), copy.member_names());
        for name in original.member_names() {
            assert_eq!(original.blob_for(&name).unwrap(), copy.blob_for(&name).unwrap());
        }
    }

    #[test]
    fn test_worksheet_edit() {
        let mut workbook = Workbook::from_bytes(sample()).unwrap();
        {
            let mut sheet = workbook.part_mut("xl/worksheets/sheet1.xml").unwrap();
            sheet.root_mut().set_attribute("data-touched", "1");
        }
        assert!(workbook.part_mut("xl/worksheets/sheet2.xml").is_none());

        let reopened = Workbook::from_bytes(workbook.save_to_buffer().unwrap()).unwrap();
        let sheet = reopened.worksheets().next().unwrap();
        assert_eq!(sheet.tree().root().attribute("data-touched"), Some("1"));
        assert!(!reopened.shared_strings_part().is_dirty());
    }

    #[test]
    fn test_missing_shared_strings_is_fatal() {
        let bytes = build_archive(&[
            ("[Content_Types].xml", manifest(&[]).as_str()),
            ("xl/workbook.xml", "<workbook/>"),
            ("xl/styles.xml", "<styleSheet/>"),
        ]);
        assert!(matches!(
            Workbook::from_bytes(bytes),
            Err(OpcError::MissingPart(path)) if path == "xl/sharedStrings.xml"
        ));
    }
}
