//! The query and save surface shared by document and workbook models.
//!
//! A model is a [`Package`] opened with a fixed [`PackageLayout`]. Required
//! parts occupy the layout's slots in order, so each model only has to say
//! which slot holds its main part and which holds its styles.

use crate::ooxml::docx::bookmark::Bookmark;
use crate::ooxml::docx::paragraph::Paragraph;
use crate::ooxml::docx::styles::{DocumentProperties, default_font_size};
use crate::ooxml::docx::table::Table;
use crate::ooxml::opc::{OpcError, OpenOptions, Package, PackageLayout, Part, PartMut, Result};
use std::collections::HashMap;
use std::path::Path;

/// Separator placed between paragraph fragments by [`PackageModel::to_html`].
///
/// This is a literal backslash followed by `n`, not a line break, so the
/// rendering stays on one line.
pub const HTML_PARAGRAPH_SEPARATOR: &str = "\\n";

/// An opened package with a known layout.
pub trait PackageModel: Sized {
    /// Parts this model requires and the optional roles it discovers.
    const LAYOUT: PackageLayout;
    /// Layout slot of the main part.
    const MAIN_SLOT: usize;
    /// Layout slot of the styles part.
    const STYLES_SLOT: usize;

    fn from_package(package: Package) -> Self;

    fn package(&self) -> &Package;

    fn package_mut(&mut self) -> &mut Package;

    fn into_package(self) -> Package;

    /// Open a package from disk with default options.
    fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, OpenOptions::default())
    }

    fn open_with_options<P: AsRef<Path>>(path: P, options: OpenOptions) -> Result<Self> {
        Package::open(path, &Self::LAYOUT, options).map(Self::from_package)
    }

    /// Open a package held in memory with default options.
    fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::from_bytes_with_options(data, OpenOptions::default())
    }

    fn from_bytes_with_options(data: Vec<u8>, options: OpenOptions) -> Result<Self> {
        Package::from_bytes(data, &Self::LAYOUT, options).map(Self::from_package)
    }

    /// Open a package, run `f` on it, then release it.
    ///
    /// The archive handle is released whether `f` succeeds, fails or
    /// panics. Nothing is saved implicitly.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use opcedit::{Document, OpcError, PackageModel};
    ///
    /// let count = Document::open_scoped("report.docx", |doc| {
    ///     Ok::<_, OpcError>(doc.paragraphs().count())
    /// })?;
    /// # Ok::<(), OpcError>(())
    /// ```
    fn open_scoped<P, T, E, F>(path: P, f: F) -> std::result::Result<T, E>
    where
        P: AsRef<Path>,
        E: From<OpcError>,
        F: FnOnce(&mut Self) -> std::result::Result<T, E>,
    {
        let mut model = Self::open(path)?;
        let result = f(&mut model);
        model.close();
        result
    }

    /// Release the archive handle. Unsaved changes are discarded.
    fn close(self) {
        self.into_package().close();
    }

    #[inline]
    fn main_part(&self) -> &Part {
        self.package().required(Self::MAIN_SLOT)
    }

    /// Tracked mutable access to the main part.
    #[inline]
    fn main_part_mut(&mut self) -> PartMut<'_> {
        self.package_mut().required_mut(Self::MAIN_SLOT)
    }

    #[inline]
    fn styles_part(&self) -> &Part {
        self.package().required(Self::STYLES_SLOT)
    }

    /// Tracked mutable access to any loaded part.
    fn part_mut(&mut self, path: &str) -> Option<PartMut<'_>> {
        self.package_mut().part_mut(path)
    }

    /// Default run size in points, from the styles part's document defaults.
    fn font_size(&self) -> Option<u32> {
        default_font_size(self.styles_part().node())
    }

    fn document_properties(&self) -> DocumentProperties {
        DocumentProperties::from_styles(self.styles_part().node())
    }

    /// Every paragraph under the body of the main part, in document order.
    ///
    /// Paragraphs inside table cells and text boxes are included, so the
    /// text of a table appears in [`PackageModel::to_text`].
    fn paragraphs(&self) -> impl Iterator<Item = Paragraph<'_>> {
        let properties = self.document_properties();
        self.main_part()
            .node()
            .child("w:body")
            .into_iter()
            .flat_map(|body| body.descendants("w:p"))
            .map(move |node| Paragraph::new(node, properties))
    }

    /// Every table under the body, nested tables included, in document order.
    fn tables(&self) -> impl Iterator<Item = Table<'_>> {
        let properties = self.document_properties();
        self.main_part()
            .node()
            .child("w:body")
            .into_iter()
            .flat_map(|body| body.descendants("w:tbl"))
            .map(move |node| Table::new(node, properties))
    }

    /// Bookmarks of the main part keyed by name.
    ///
    /// The editor's `_GoBack` marker is excluded. When a name repeats, the
    /// later bookmark wins.
    fn bookmarks(&self) -> HashMap<&str, Bookmark<'_>> {
        let mut bookmarks = HashMap::new();
        for bookmark in self
            .main_part()
            .node()
            .descendants("w:bookmarkStart")
            .filter_map(Bookmark::from_node)
            .filter(|b| !b.is_go_back())
        {
            bookmarks.insert(bookmark.name(), bookmark);
        }
        bookmarks
    }

    /// Paragraph texts joined with newlines.
    fn to_text(&self) -> String {
        self.paragraphs()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[inline]
    fn text(&self) -> String {
        self.to_text()
    }

    /// Paragraph renderings joined with [`HTML_PARAGRAPH_SEPARATOR`].
    fn to_html(&self) -> String {
        self.paragraphs()
            .map(|p| p.to_html())
            .collect::<Vec<_>>()
            .join(HTML_PARAGRAPH_SEPARATOR)
    }

    /// Override the bytes written for an archive entry on the next save.
    fn replace_entry(&mut self, path: impl Into<String>, bytes: Vec<u8>) {
        self.package_mut().replace_entry(path, bytes);
    }

    /// Save to `path`. The model stays open afterwards.
    fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.package_mut().save(path)
    }

    fn save_to_buffer(&mut self) -> Result<Vec<u8>> {
        self.package_mut().save_to_buffer()
    }

    /// Optional parts declared in the manifest but absent from the archive.
    #[inline]
    fn skipped_parts(&self) -> &[String] {
        self.package().skipped_parts()
    }

    #[inline]
    fn entry_names(&self) -> &[String] {
        self.package().entry_names()
    }
}
