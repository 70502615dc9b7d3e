//! Excel (.xlsx) workbook support.
//!
//! A [`Workbook`] loads the workbook, shared strings and styles parts plus
//! every worksheet, chart, drawing and comment part the manifest declares.
//! Parts are exposed as trees; there is no cell-level model.

pub mod workbook;

pub use workbook::{SPREADSHEET, Workbook};
