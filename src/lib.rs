//! opcedit - read, query and rewrite Office Open XML packages
//!
//! This library opens .docx and .xlsx files as OPC (Open Packaging
//! Conventions) packages, loads their XML parts into mutable trees, answers
//! structural queries over them and writes the package back out.
//!
//! # Features
//!
//! - **Manifest-driven loading**: required parts by fixed path, optional
//!   parts (headers, footers, charts, worksheets, ...) discovered through
//!   `[Content_Types].xml`
//! - **Namespace normalization**: queries use fixed prefixes no matter how
//!   the producer declared them
//! - **Tracked edits**: only parts mutated through [`PartMut`] are
//!   re-serialized; every other entry is copied from the source untouched
//! - **Atomic save**: write to a temporary file and rename into place
//!
//! # Example - Reading a DOCX file
//!
//! ```no_run
//! use opcedit::{Document, PackageModel};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = Document::open("document.docx")?;
//!
//! println!("Default size: {:?}pt", doc.font_size());
//! for para in doc.paragraphs() {
//!     println!("Paragraph: {}", para.text());
//! }
//! for (name, bookmark) in doc.bookmarks() {
//!     println!("Bookmark {name} -> {:?}", bookmark.id());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Editing and saving
//!
//! ```no_run
//! use opcedit::{Document, OpcError, PackageModel};
//!
//! # fn main() -> Result<(), OpcError> {
//! Document::open_scoped("report.docx", |doc| {
//!     doc.main_part_mut()
//!         .root_mut()
//!         .set_attribute("xmlns:custom", "urn:example:custom");
//!     doc.save("report-edited.docx")
//! })?;
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod ooxml;

pub use ooxml::docx::{Bookmark, Document, DocumentProperties, Paragraph, Table, TextRun};
pub use ooxml::model::PackageModel;
pub use ooxml::opc::{OpcError, OpenOptions, Part, PartMut, Result, SaveCompression};
pub use ooxml::xlsx::Workbook;
