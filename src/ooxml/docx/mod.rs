//! Word (.docx) document support.
//!
//! # Architecture
//!
//! The module is organized around these key types:
//! - `Document`: the opened package with its loaded parts
//! - `Paragraph` / `TextRun`: read views over `w:p` and `w:r`
//! - `Table` / `TableRow` / `TableCell`: read views over `w:tbl` and friends
//! - `Bookmark`: a read view over `w:bookmarkStart`
//!
//! # Example
//!
//! ```rust,no_run
//! use opcedit::{Document, PackageModel};
//!
//! let doc = Document::open("document.docx")?;
//!
//! for para in doc.paragraphs() {
//!     println!("Paragraph: {}", para.text());
//!     for run in para.runs() {
//!         println!("  Run: {} (bold: {:?})", run.text(), run.bold());
//!     }
//! }
//!
//! for table in doc.tables() {
//!     for row in table.rows() {
//!         for cell in row.cells() {
//!             println!("Cell: {}", cell.text());
//!         }
//!     }
//! }
//! # Ok::<(), opcedit::OpcError>(())
//! ```
pub mod bookmark;
pub mod document;
pub mod paragraph;
pub mod styles;
pub mod table;

pub use bookmark::Bookmark;
pub use document::{Document, WORDPROCESSING};
pub use paragraph::{Paragraph, TextRun};
pub use styles::DocumentProperties;
pub use table::{Table, TableCell, TableColumn, TableRow};
