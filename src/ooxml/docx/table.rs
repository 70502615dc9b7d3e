//! Table projections.

use crate::common::xml::XmlNode;
use crate::ooxml::docx::paragraph::Paragraph;
use crate::ooxml::docx::styles::DocumentProperties;

/// A table in a Word document.
///
/// Represents a `<w:tbl>` element.
///
/// # Examples
///
/// ```rust,no_run
/// use opcedit::{Document, PackageModel};
///
/// let doc = Document::open("document.docx")?;
/// for table in doc.tables() {
///     println!("{}x{}", table.row_count(), table.column_count());
///     for row in table.rows() {
///         let cells: Vec<String> = row.cells().iter().map(|c| c.text()).collect();
///         println!("{}", cells.join(" | "));
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    node: XmlNode<'a>,
    properties: DocumentProperties,
}

impl<'a> Table<'a> {
    pub(crate) fn new(node: XmlNode<'a>, properties: DocumentProperties) -> Self {
        Self { node, properties }
    }

    #[inline]
    pub fn node(&self) -> XmlNode<'a> {
        self.node
    }

    /// Direct `w:tr` rows of this table.
    pub fn rows(&self) -> Vec<TableRow<'a>> {
        let properties = self.properties;
        self.node
            .children("w:tr")
            .map(|node| TableRow { node, properties })
            .collect()
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.node.children("w:tr").count()
    }

    /// Number of grid columns declared in `w:tblGrid`.
    pub fn column_count(&self) -> usize {
        self.node
            .child("w:tblGrid")
            .map_or(0, |grid| grid.children("w:gridCol").count())
    }

    /// Cells grouped by grid column.
    ///
    /// Rows with fewer cells than the grid (merged cells) simply contribute
    /// nothing to the trailing columns.
    pub fn columns(&self) -> Vec<TableColumn<'a>> {
        let rows: Vec<Vec<TableCell<'a>>> = self.rows().iter().map(TableRow::cells).collect();
        (0..self.column_count())
            .map(|index| TableColumn {
                cells: rows.iter().filter_map(|cells| cells.get(index).copied()).collect(),
            })
            .collect()
    }
}

/// A table row (`<w:tr>`).
#[derive(Debug, Clone, Copy)]
pub struct TableRow<'a> {
    node: XmlNode<'a>,
    properties: DocumentProperties,
}

impl<'a> TableRow<'a> {
    #[inline]
    pub fn node(&self) -> XmlNode<'a> {
        self.node
    }

    pub fn cells(&self) -> Vec<TableCell<'a>> {
        let properties = self.properties;
        self.node
            .children("w:tc")
            .map(|node| TableCell { node, properties })
            .collect()
    }
}

/// One grid column of a table, collected across its rows.
#[derive(Debug, Clone)]
pub struct TableColumn<'a> {
    cells: Vec<TableCell<'a>>,
}

impl<'a> TableColumn<'a> {
    #[inline]
    pub fn cells(&self) -> &[TableCell<'a>] {
        &self.cells
    }
}

/// A table cell (`<w:tc>`).
#[derive(Debug, Clone, Copy)]
pub struct TableCell<'a> {
    node: XmlNode<'a>,
    properties: DocumentProperties,
}

impl<'a> TableCell<'a> {
    #[inline]
    pub fn node(&self) -> XmlNode<'a> {
        self.node
    }

    pub fn paragraphs(&self) -> Vec<Paragraph<'a>> {
        let properties = self.properties;
        self.node
            .children("w:p")
            .map(|node| Paragraph::new(node, properties))
            .collect()
    }

    /// Paragraph texts of the cell joined with newlines.
    pub fn text(&self) -> String {
        self.paragraphs()
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
