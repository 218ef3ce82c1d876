//! Shared fixtures: builds real .xlsx workbooks in memory

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;

/// A fixture cell
#[derive(Clone, Copy)]
pub enum Cell {
    Text(&'static str),
    Number(f64),
    Blank,
}

pub use Cell::{Blank, Number as N, Text as T};

pub const APP_HEADER: [&str; 8] = [
    "Key",
    "HAS_LINKS",
    "tr_TR",
    "en_INT",
    "tr_TR_Link_Text",
    "tr_TR_Link_URL",
    "en_INT_Link_Text",
    "en_INT_Link_URL",
];

pub const BACKEND_HEADER: [&str; 3] = ["Key", "en", "tr"];

/// One sheet: header row followed by data rows
pub fn xlsx(header: &[&str], rows: &[Vec<Cell>]) -> Vec<u8> {
    xlsx_sheets(&[("Sheet1", header, rows)])
}

pub fn xlsx_sheets(sheets: &[(&str, &[&str], &[Vec<Cell>])]) -> Vec<u8> {
    let mut book = Workbook::new();

    for (name, header, rows) in sheets {
        let sheet = book.add_worksheet();
        sheet.set_name(*name).unwrap();

        for (col, title) in header.iter().enumerate() {
            sheet.write_string(0, col as u16, *title).unwrap();
        }

        for (r, row) in rows.iter().enumerate() {
            let r = (r + 1) as u32;
            for (c, cell) in row.iter().enumerate() {
                let c = c as u16;
                match cell {
                    Cell::Text(s) => {
                        sheet.write_string(r, c, *s).unwrap();
                    }
                    Cell::Number(n) => {
                        sheet.write_number(r, c, *n).unwrap();
                    }
                    Cell::Blank => {}
                }
            }
        }
    }

    book.save_to_buffer().unwrap()
}

/// Label row that app sheets carry as their first data row
pub fn app_label_row() -> Vec<Cell> {
    vec![
        T("Key"),
        T("Has links"),
        T("Türkçe"),
        T("English"),
        T("TR link text"),
        T("TR link"),
        T("EN link text"),
        T("EN link"),
    ]
}
