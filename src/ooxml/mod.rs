//! Office Open XML (OOXML) package editing.
//!
//! # Architecture
//!
//! 1. **OPC Layer** (`opc`): archive access, manifest, part loading,
//!    namespace normalization and write-back
//! 2. **Model** (`model`): the query and save surface shared by all
//!    package kinds
//! 3. **Format-Specific Modules**:
//!    - `docx`: Word documents and their paragraph/table/bookmark views
//!    - `xlsx`: Excel workbooks
//!
//! # Example: Working with Word Documents
//!
//! ```rust,no_run
//! use opcedit::ooxml::docx::Document;
//! use opcedit::ooxml::model::PackageModel;
//!
//! let doc = Document::open("document.docx")?;
//! println!("Document contains {} paragraphs", doc.paragraphs().count());
//! println!("{}", doc.to_html());
//! # Ok::<(), opcedit::ooxml::opc::OpcError>(())
//! ```
pub mod docx;
pub mod model;
pub mod opc;
pub mod xlsx;

pub use docx::Document;
pub use model::PackageModel;
pub use opc::{OpcError, OpenOptions, Package, Part, PartMut, SaveCompression};
pub use xlsx::Workbook;
