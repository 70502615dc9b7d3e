//! Bookmark support for Word documents.
//!
//! Bookmarks mark locations or regions in a document. Only the
//! `<w:bookmarkStart>` element is projected; it carries both the name and
//! the id that pairs it with its `<w:bookmarkEnd>`.
use crate::common::xml::XmlNode;

/// Name of the bookmark Word maintains for its "go back" navigation.
pub(crate) const GO_BACK: &str = "_GoBack";

/// A bookmark in a Word document.
///
/// # Examples
///
/// ```rust,no_run
/// use opcedit::{Document, PackageModel};
///
/// let doc = Document::open("document.docx")?;
/// for (name, bookmark) in doc.bookmarks() {
///     println!("Bookmark: {} (ID: {:?})", name, bookmark.id());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Bookmark<'a> {
    name: &'a str,
    node: XmlNode<'a>,
}

impl<'a> Bookmark<'a> {
    /// Project a `w:bookmarkStart` element; `None` if it has no name.
    pub(crate) fn from_node(node: XmlNode<'a>) -> Option<Self> {
        let name = node.attribute("w:name")?;
        Some(Self { name, node })
    }

    #[inline]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Numeric `w:id`, if present and valid.
    pub fn id(&self) -> Option<u32> {
        let id = self.node.attribute("w:id")?;
        atoi_simd::parse::<u32, false, false>(id.as_bytes()).ok()
    }

    /// The underlying `w:bookmarkStart` element.
    #[inline]
    pub fn node(&self) -> XmlNode<'a> {
        self.node
    }

    #[inline]
    pub(crate) fn is_go_back(&self) -> bool {
        self.name == GO_BACK
    }
}
