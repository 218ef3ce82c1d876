//! Workbook importer implementation - spreadsheet bytes → header-keyed rows

use crate::error::{LocsheetError, LocsheetResult};
use crate::types::{format_number, CellValue, Row, SheetSelector};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Name given to columns whose header cell is blank
const EMPTY_HEADER: &str = "__EMPTY";

/// A decoded worksheet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sheet {
    pub name: String,
    /// Column names taken from the header row
    pub headers: Vec<String>,
    /// Data rows after the header, blank rows removed
    pub rows: Vec<Row>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            headers: Vec::new(),
            rows,
        }
    }
}

/// A fully decoded workbook. Sheets keep their workbook order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// Decode a workbook held in memory
    pub fn from_bytes(bytes: &[u8]) -> LocsheetResult<Self> {
        WorkbookImporter::from_bytes(bytes.to_vec()).import()
    }

    /// Read and decode a workbook file
    pub fn open<P: AsRef<Path>>(path: P) -> LocsheetResult<Self> {
        WorkbookImporter::open(path)?.import()
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// Pick the sheet to convert
    pub fn select(&self, selector: &SheetSelector) -> LocsheetResult<&Sheet> {
        match selector {
            SheetSelector::First => self
                .sheets
                .first()
                .ok_or_else(|| LocsheetError::Decode("workbook contains no sheets".to_string())),
            SheetSelector::Index(index) => self
                .sheets
                .get(*index)
                .ok_or_else(|| LocsheetError::SheetNotFound(format!("#{}", index))),
            SheetSelector::Name(name) => self
                .sheets
                .iter()
                .find(|s| &s.name == name)
                .ok_or_else(|| LocsheetError::SheetNotFound(name.clone())),
        }
    }
}

/// Decodes xlsx/xlsm/xlsb/xls/ods bytes into a [`Workbook`]
pub struct WorkbookImporter {
    bytes: Vec<u8>,
}

impl WorkbookImporter {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn open<P: AsRef<Path>>(path: P) -> LocsheetResult<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Ok(Self::from_bytes(bytes))
    }

    /// Decode every sheet of the workbook
    pub fn import(self) -> LocsheetResult<Workbook> {
        if self.bytes.is_empty() {
            return Err(LocsheetError::Decode("file is empty".to_string()));
        }

        let mut workbook = open_workbook_auto_from_rs(Cursor::new(self.bytes))
            .map_err(|e| LocsheetError::Decode(e.to_string()))?;

        let mut sheets = Vec::new();
        for sheet_name in workbook.sheet_names() {
            let range = workbook
                .worksheet_range(&sheet_name)
                .map_err(|e| LocsheetError::Decode(format!("sheet '{}': {}", sheet_name, e)))?;
            let sheet = read_sheet(sheet_name, &range);
            debug!(
                sheet = %sheet.name,
                columns = sheet.headers.len(),
                rows = sheet.rows.len(),
                "decoded sheet"
            );
            sheets.push(sheet);
        }

        Ok(Workbook::new(sheets))
    }
}

/// First row of the used range is the header; the rest become rows
fn read_sheet(name: String, range: &Range<Data>) -> Sheet {
    let mut rows = range.rows();

    let headers = match rows.next() {
        Some(header_cells) => header_names(header_cells),
        None => {
            return Sheet {
                name,
                headers: Vec::new(),
                rows: Vec::new(),
            }
        }
    };

    let rows = rows
        .filter_map(|cells| {
            let mut row = Row::new();
            for (header, cell) in headers.iter().zip(cells) {
                let value = cell_value(cell);
                if value != CellValue::Empty {
                    row.insert(header.clone(), value);
                }
            }
            // Blank rows are not data
            if row.is_empty() {
                None
            } else {
                Some(row)
            }
        })
        .collect();

    Sheet {
        name,
        headers,
        rows,
    }
}

/// Header texts, with blanks named `__EMPTY` and repeats suffixed `_1`, `_2`, ...
fn header_names(cells: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    cells
        .iter()
        .map(|cell| {
            let base = match cell_value(cell) {
                CellValue::Text(s) if !s.is_empty() => s,
                CellValue::Number(n) => format_number(n),
                CellValue::Bool(b) => b.to_string(),
                _ => EMPTY_HEADER.to_string(),
            };

            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{}_{}", base, count)
            };
            *count += 1;
            name
        })
        .collect()
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            CellValue::Text(s.clone())
        }
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        // #N/A, #DIV/0! and friends carry no value
        Data::Error(_) => CellValue::Empty,
    }
}
