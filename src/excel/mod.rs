//! Spreadsheet import
//!
//! Decodes workbook bytes (xlsx, xlsm, xlsb, xls, ods) into sheets of
//! header-keyed rows.

mod importer;

pub use importer::{Sheet, Workbook, WorkbookImporter};
