//! locsheet - Spreadsheet to JSON localization converter
//!
//! Reads a workbook of localization strings and produces JSON dictionaries
//! for client apps (`app` mode: one file per language, optional link lists)
//! or backend services (`backend` mode: one file nesting `en` and `tr`).
//!
//! # Example
//!
//! ```no_run
//! use locsheet::core::{convert, ConversionOutput};
//! use locsheet::excel::Workbook;
//! use locsheet::types::{ConversionMode, SheetSelector};
//!
//! let workbook = Workbook::open("strings.xlsx")?;
//! let output = convert(&workbook, &SheetSelector::First, ConversionMode::Backend)?;
//!
//! if let ConversionOutput::Backend { combined } = output {
//!     println!("{}", combined);
//! }
//! # Ok::<(), locsheet::error::LocsheetError>(())
//! ```

pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{LocsheetError, LocsheetResult};
pub use types::{
    AppDictionaries, CellValue, CombinedDictionary, ConversionMode, Entry, LanguageDictionary,
    Link, Row, SheetSelector,
};
