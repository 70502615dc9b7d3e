//! Word document model.
use crate::ooxml::model::PackageModel;
use crate::ooxml::opc::constants::{part_name_hint, part_path};
use crate::ooxml::opc::part::{OptionalRole, RequiredPart};
use crate::ooxml::opc::{NamespaceCategory, Package, PackageLayout, Part, PartRole};

/// Parts of a WordprocessingML package.
pub const WORDPROCESSING: PackageLayout = PackageLayout {
    required: &[
        RequiredPart {
            path: part_path::WML_DOCUMENT,
            role: PartRole::MainDocument,
            category: NamespaceCategory::Base,
        },
        RequiredPart {
            path: part_path::WML_STYLES,
            role: PartRole::Styles,
            category: NamespaceCategory::Base,
        },
    ],
    optional: &[
        OptionalRole {
            role: PartRole::HeaderFooter,
            hints: &[part_name_hint::HEADER, part_name_hint::FOOTER],
            category: NamespaceCategory::Base,
        },
        OptionalRole {
            role: PartRole::Chart,
            hints: &[part_name_hint::CHART],
            category: NamespaceCategory::Extended,
        },
        OptionalRole {
            role: PartRole::Diagram,
            hints: &[part_name_hint::DIAGRAM],
            category: NamespaceCategory::Extended,
        },
    ],
};

/// An opened Word document (.docx).
///
/// The query and save surface comes from [`PackageModel`]; this type adds
/// the word-processing part accessors.
///
/// # Examples
///
/// ```rust,no_run
/// use opcedit::{Document, PackageModel};
///
/// let mut doc = Document::open("document.docx")?;
/// println!("{}", doc.to_text());
///
/// if let Some(body) = doc.main_part_mut().root_mut().child_mut("w:body") {
///     body.set_attribute("data-reviewed", "1");
/// }
/// doc.save("document-reviewed.docx")?;
/// # Ok::<(), opcedit::OpcError>(())
/// ```
pub struct Document {
    package: Package,
}

impl PackageModel for Document {
    const LAYOUT: PackageLayout = WORDPROCESSING;
    const MAIN_SLOT: usize = 0;
    const STYLES_SLOT: usize = 1;

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

impl Document {
    /// Loaded header and footer parts, in manifest order.
    pub fn headers_and_footers(&self) -> impl Iterator<Item = &Part> {
        self.package.parts_with_role(PartRole::HeaderFooter)
    }

    pub fn charts(&self) -> impl Iterator<Item = &Part> {
        self.package.parts_with_role(PartRole::Chart)
    }

    pub fn diagrams(&self) -> impl Iterator<Item = &Part> {
        self.package.parts_with_role(PartRole::Diagram)
    }
}
