//! Excel import module
//!
//! Reads every worksheet of a results workbook into a `SheetTable`:
//! labelled columns over rows of cells, ready for column inference.

mod importer;

pub use importer::{ExcelImporter, SheetTable};
